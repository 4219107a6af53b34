use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FilterArg, OutputFormat, TableKind, parse_filter};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `festdesk` binary.
#[derive(Parser, Debug)]
#[command(
	name = "festdesk",
	version,
	long_version = long_version(),
	about = "Search, filter and page through fest participant and registration exports",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		required_unless_present = "list_themes",
		help = "JSON export holding the rows to display"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FESTDESK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_enum,
		help = "Table layout used for the rows (default: participants)"
	)]
	pub(crate) table: Option<TableKind>,
	#[arg(
		short = 'k',
		long = "key-field",
		value_name = "FIELD",
		help = "Field that uniquely identifies a generic row (default: id)"
	)]
	pub(crate) key_field: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Fuzzy search query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'f',
		long = "search-field",
		value_name = "FIELD",
		help = "Field the query is matched against (default: the table's first search field)"
	)]
	pub(crate) search_field: Option<String>,
	#[arg(
		long,
		value_name = "0.0-1.0",
		help = "Fuzziness of the search, 0.0 exact to 1.0 anything (default: 0.3)"
	)]
	pub(crate) threshold: Option<f64>,
	#[arg(
		short = 'F',
		long = "filter",
		value_name = "FIELD=VALUE",
		value_parser = parse_filter,
		action = ArgAction::Append,
		help = "Keep rows whose field equals the value; quote the value to compare text (default: none)"
	)]
	pub(crate) filters: Vec<FilterArg>,
	#[arg(
		short = 's',
		long,
		value_name = "COLUMN",
		help = "Sort by a column (default: original order)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(
		short = 'd',
		long = "desc",
		requires = "sort",
		help = "Sort descending (default: ascending)"
	)]
	pub(crate) descending: bool,
	#[arg(
		short = 'p',
		long,
		value_name = "N",
		value_parser = clap::value_parser!(u64).range(1..),
		help = "Page to show, starting at 1 (default: 1)"
	)]
	pub(crate) page: Option<u64>,
	#[arg(
		long = "page-size",
		value_name = "ROWS",
		help = "Rows per page (default: table specific)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long,
		value_name = "COLUMNS",
		value_delimiter = ',',
		help = "Columns to hide, comma separated (default: none)"
	)]
	pub(crate) hide: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "COLUMNS",
		value_delimiter = ',',
		help = "Columns to show, including ones hidden on narrow screens (default: none)"
	)]
	pub(crate) show: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "KEYS",
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Preselect rows by key, comma separated (default: none)"
	)]
	pub(crate) select: Vec<String>,
	#[arg(
		long = "select-all",
		help = "Select every row matching the query and filters (default: disabled)"
	)]
	pub(crate) select_all: bool,
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format for printed results (default: plain)"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short,
		long,
		help = "Browse the table interactively before printing (default: disabled)"
	)]
	pub(crate) interactive: bool,
	#[arg(
		long,
		value_name = "TITLE",
		help = "Title drawn on the table border (default: table specific)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Colour theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'w',
		long,
		value_name = "COLUMNS",
		help = "Width of the plain text rendering (default: 100)"
	)]
	pub(crate) width: Option<u16>,
	#[arg(
		long = "list-themes",
		help = "List available themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short,
		long,
		help = "Log to stderr at debug level instead of the log file (default: disabled)"
	)]
	pub(crate) verbose: bool,
}
