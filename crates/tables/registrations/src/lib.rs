use festdesk_table_api::{
	Align, ColumnDescriptor, FieldRef, SearchField, TableDescriptor, TableOptions, TableRecord,
	TableUiDefinition,
};
use serde::{Deserialize, Serialize};

const TABLE_KEY: &str = "registrations";

pub fn descriptor() -> &'static TableDescriptor {
	&REGISTRATIONS_DESCRIPTOR
}

pub fn options() -> TableOptions {
	TableOptions::from_descriptor(descriptor())
}

static SEARCH_FIELDS: [SearchField; 5] = [
	SearchField::fixed("participant", "Participant"),
	SearchField::fixed("email", "Email"),
	SearchField::fixed("event", "Event"),
	SearchField::fixed("team", "Team"),
	SearchField::fixed("transaction_id", "Transaction"),
];

pub static REGISTRATIONS_DESCRIPTOR: TableDescriptor = TableDescriptor {
	id: TABLE_KEY,
	ui: TableUiDefinition {
		tab_label: "Registrations",
		table_title: "Event registrations",
		hint: "Type to search. Tab switches the search field.",
		count_label: "registrations",
	},
	key_field: "id",
	search_fields: &SEARCH_FIELDS,
	default_search_field: "participant",
	default_page_size: 15,
};

/// Payment state of a registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
	#[default]
	Pending,
	Paid,
	Refunded,
	Disputed,
}

impl PaymentStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			PaymentStatus::Pending => "pending",
			PaymentStatus::Paid => "paid",
			PaymentStatus::Refunded => "refunded",
			PaymentStatus::Disputed => "disputed",
		}
	}
}

/// A participant's (or team's) entry into one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
	pub id: String,
	pub participant: String,
	pub email: String,
	pub event: String,
	#[serde(default)]
	pub team: Option<String>,
	#[serde(default)]
	pub amount: Option<f64>,
	#[serde(default)]
	pub status: PaymentStatus,
	#[serde(default)]
	pub transaction_id: Option<String>,
	#[serde(default)]
	pub registered_at: Option<String>,
}

impl TableRecord for Registration {
	fn field(&self, key: &str) -> FieldRef<'_> {
		match key {
			"id" => self.id.as_str().into(),
			"participant" => self.participant.as_str().into(),
			"email" => self.email.as_str().into(),
			"event" => self.event.as_str().into(),
			"team" => self.team.as_deref().into(),
			"amount" => self.amount.into(),
			"status" => self.status.as_str().into(),
			"transaction_id" => self.transaction_id.as_deref().into(),
			"registered_at" => self.registered_at.as_deref().into(),
			_ => FieldRef::Null,
		}
	}
}

pub fn columns() -> Vec<ColumnDescriptor<Registration>> {
	vec![
		ColumnDescriptor::new("id", "ID").width(10),
		ColumnDescriptor::new("participant", "Participant").width(22),
		ColumnDescriptor::new("email", "Email")
			.width(28)
			.hide_on_mobile(true),
		ColumnDescriptor::new("event", "Event").width(18),
		ColumnDescriptor::new("team", "Team").width(16),
		ColumnDescriptor::new("amount", "Amount")
			.width(10)
			.align(Align::Right)
			.render_with(|registration: &Registration, _| {
				registration
					.amount
					.map(|amount| format!("₹{amount:.2}"))
					.unwrap_or_default()
			}),
		ColumnDescriptor::new("status", "Status").width(10),
		ColumnDescriptor::new("transaction_id", "Transaction")
			.width(18)
			.hide_on_mobile(true),
		ColumnDescriptor::new("registered_at", "Registered")
			.width(20)
			.hide_on_mobile(true),
	]
}
