use festdesk_table_api::{
	Align, ColumnDescriptor, FieldRef, SearchField, TableDescriptor, TableOptions, TableRecord,
	TableUiDefinition,
};
use serde::{Deserialize, Serialize};

const TABLE_KEY: &str = "participants";

pub fn descriptor() -> &'static TableDescriptor {
	&PARTICIPANTS_DESCRIPTOR
}

/// Engine options for a freshly mounted participants table.
pub fn options() -> TableOptions {
	TableOptions::from_descriptor(descriptor())
}

static SEARCH_FIELDS: [SearchField; 6] = [
	SearchField::fixed("name", "Name"),
	SearchField::fixed("email", "Email"),
	SearchField::fixed("college", "College"),
	SearchField::fixed("city", "City"),
	SearchField::fixed("phone", "Phone"),
	SearchField::fixed("team", "Team"),
];

pub static PARTICIPANTS_DESCRIPTOR: TableDescriptor = TableDescriptor {
	id: TABLE_KEY,
	ui: TableUiDefinition {
		tab_label: "Participants",
		table_title: "Registered participants",
		hint: "Type to search. Tab switches the search field.",
		count_label: "participants",
	},
	key_field: "email",
	search_fields: &SEARCH_FIELDS,
	default_search_field: "name",
	default_page_size: 10,
};

/// One person registered for the fest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub college: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub team: Option<String>,
	#[serde(default)]
	pub event: Option<String>,
	#[serde(default, alias = "checkedIn")]
	pub checked_in: bool,
}

impl TableRecord for Participant {
	fn field(&self, key: &str) -> FieldRef<'_> {
		match key {
			"name" => self.name.as_str().into(),
			"email" => self.email.as_str().into(),
			"college" => self.college.as_deref().into(),
			"city" => self.city.as_deref().into(),
			"phone" => self.phone.as_deref().into(),
			"team" => self.team.as_deref().into(),
			"event" => self.event.as_deref().into(),
			"checked_in" => self.checked_in.into(),
			_ => FieldRef::Null,
		}
	}
}

/// Columns of the participants table, in display order.
pub fn columns() -> Vec<ColumnDescriptor<Participant>> {
	vec![
		ColumnDescriptor::new("index", "#")
			.width(4)
			.sortable(false)
			.align(Align::Right)
			.render_with(|_: &Participant, row_index| (row_index + 1).to_string()),
		ColumnDescriptor::new("name", "Name").width(22),
		ColumnDescriptor::new("email", "Email").width(28),
		ColumnDescriptor::new("college", "College")
			.width(24)
			.hide_on_mobile(true),
		ColumnDescriptor::new("city", "City").width(14).hide_on_mobile(true),
		ColumnDescriptor::new("phone", "Phone")
			.width(14)
			.hide_on_mobile(true),
		ColumnDescriptor::new("team", "Team")
			.width(16)
			.render_with(|participant: &Participant, _| {
				participant.team.clone().unwrap_or_else(|| "Solo".to_string())
			}),
		ColumnDescriptor::new("event", "Event").width(18),
		ColumnDescriptor::new("checked_in", "Checked in")
			.width(10)
			.align(Align::Center)
			.render_with(|participant: &Participant, _| {
				String::from(if participant.checked_in { "yes" } else { "no" })
			}),
	]
}
