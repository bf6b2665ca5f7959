//! Common test fixtures for tessera-tables tests

#![allow(dead_code)]

use rstest::*;
use serde::Serialize;
use serde_json::{Value, json};
use tessera_core::{Environment, QueryParams, Serialized, Settings, TableSettings};
use tessera_tables::{Grid, register_templates};

/// Test user record, displayed through its serialized form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestUser {
	pub id: i32,
	pub name: String,
	pub email: String,
	pub active: bool,
}

/// Fixture providing sample users for testing
#[fixture]
pub fn sample_users() -> Vec<Serialized<TestUser>> {
	[
		(1, "Alice", "alice@example.com", true),
		(2, "Bob", "bob@test.org", false),
		(3, "Charlie", "charlie@example.com", true),
	]
	.into_iter()
	.map(|(id, name, email, active)| {
		Serialized::new(TestUser {
			id,
			name: name.to_string(),
			email: email.to_string(),
			active,
		})
		.unwrap()
	})
	.collect()
}

/// Fixture providing JSON rows, 25 of them
#[fixture]
pub fn json_rows() -> Vec<Value> {
	(1..=25)
		.map(|id| json!({"id": id, "name": format!("User {:02}", id), "team": {"name": if id % 2 == 0 { "even" } else { "odd" }}}))
		.collect()
}

/// Fixture providing an empty grid over JSON rows
#[fixture]
pub fn grid() -> Grid<Value> {
	Grid::new(&TableSettings::default(), QueryParams::new())
}

/// Builds a grid reading the given query string
pub fn grid_with_query(query: &str) -> Grid<Value> {
	Grid::new(&TableSettings::default(), QueryParams::parse(query).unwrap())
}

/// Fixture providing an environment with the table templates registered
#[fixture]
pub fn env() -> Environment {
	let mut env = Environment::new(Settings::default());
	register_templates(env.templates_mut()).unwrap();
	env
}
