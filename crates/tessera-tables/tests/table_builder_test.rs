mod fixtures;

use fixtures::*;
use rstest::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use tessera_core::{Environment, QueryParams, Serialized, Settings};
use tessera_html::{Expression, attributes};
use tessera_tables::{MemoryQuery, Model, TableBuilder, TableError, register_templates};

#[rstest]
fn test_render_horizontal(env: Environment, sample_users: Vec<Serialized<TestUser>>) {
	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(sample_users), false);
		grid.set_attributes(attributes([("class", "table"), ("id", "users")]));
		grid.row_attributes(|row: &Serialized<TestUser>| {
			if row.inner().active {
				attributes([("class", "active")])
			} else {
				attributes([("class", "inactive")])
			}
		});
		grid.column("id");
		grid.labeled_column("Name & Email", "name");
		grid.column_with("email", |column| {
			column
				.set_headers(["text-muted"])
				.set_attributes_with(|_| attributes([("class", "email")]));
		});
		Ok(())
	})
	.unwrap();

	let html = table.render().unwrap();

	assert!(html.starts_with(r#"<table class="table" id="users">"#));
	assert!(html.contains("<th>Id</th>"));
	assert!(html.contains("<th>Name &amp; Email</th>"));
	assert!(html.contains(r#"<th class="text-muted">Email</th>"#));
	assert!(html.contains(r#"<tr class="active">"#));
	assert!(html.contains(r#"<tr class="inactive">"#));
	assert!(html.contains("<td>Charlie</td>"));
	assert!(html.contains(r#"<td class="email">bob@test.org</td>"#));
	assert!(!html.contains("norecords"));
	assert!(!html.contains("pagination"));
}

#[rstest]
fn test_render_escapes_text_but_not_expressions(env: Environment) {
	let rows = vec![json!({"id": 1, "name": "<script>alert(1)</script>"})];
	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(rows), false);
		grid.column("name");
		grid.anonymous_column(|column| {
			column.set_label("Action").set_value_with(|row: &Value| {
				Expression::new(format!(r#"<a href="/users/{}">Edit</a>"#, row["id"])).into()
			});
		});
		Ok(())
	})
	.unwrap();

	let html = table.render().unwrap();

	assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
	assert!(!html.contains("<script>"));
	assert!(html.contains(r#"<td><a href="/users/1">Edit</a></td>"#));
}

#[rstest]
fn test_render_empty_message_is_translated() {
	let catalog: HashMap<String, String> =
		HashMap::from([("No records".to_string(), "Aucun résultat".to_string())]);
	let mut env = Environment::new(Settings::default()).with_translator(catalog);
	register_templates(env.templates_mut()).unwrap();

	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(Vec::<Value>::new()), false);
		grid.column("id");
		grid.column("name");
		Ok(())
	})
	.unwrap();

	let html = table.render().unwrap();
	assert!(html.contains(r#"<tr class="norecords">"#));
	assert!(html.contains(r#"<td colspan="2">Aucun résultat</td>"#));
}

#[rstest]
fn test_render_vertical(env: Environment) {
	let rows = vec![json!({"id": 5, "name": "Eve"})];
	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(rows), false);
		grid.layout("vertical");
		grid.column("id");
		grid.labeled_column("Full Name", "name");
		Ok(())
	})
	.unwrap();

	let html = table.render().unwrap();
	assert!(!html.contains("<thead>"));
	assert!(html.contains("<th>Id</th>\n\t\t\t<td>5</td>"));
	assert!(html.contains("<th>Full Name</th>\n\t\t\t<td>Eve</td>"));
}

#[rstest]
fn test_render_pagination_links_keep_query(env: Environment, json_rows: Vec<Value>) {
	let query = QueryParams::parse("q=user&page=2&order_by=id").unwrap();
	let mut table = TableBuilder::make(&env, query, |grid| {
		grid.with(MemoryQuery::new(json_rows), true);
		grid.paginate(10);
		grid.search(&["name"])?.sort()?;
		grid.column("id");
		Ok(())
	})
	.unwrap();

	let context = table.context().unwrap();
	assert!(context.grid.paginated);
	assert_eq!(context.rows.len(), 10);
	assert_eq!(context.rows[0].cells[0].html, "11");
	assert_eq!(context.grid.search.as_ref().unwrap().keyword.value.as_deref(), Some("user"));

	let links = &context.pagination;
	assert!(links.contains(r#"<li class="active"><span>2</span></li>"#));
	assert!(links.contains(r#"href="?q=user&amp;order_by=id&amp;page=1""#));
	assert!(links.contains(r#"href="?q=user&amp;order_by=id&amp;page=3""#));
	assert!(!links.contains("page=2&amp;"));

	let html = table.render().unwrap();
	assert!(html.contains(r#"<ul class="pagination">"#));
}

#[rstest]
fn test_extend_and_custom_view() {
	let mut env = Environment::default();
	env.templates_mut()
		.register(
			"admin/users.html",
			"{% for row in rows %}[{% for cell in row.cells %}{{ cell.id }}={{ cell.html | safe }};{% endfor %}]{% endfor %}",
		)
		.unwrap();

	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(vec![json!({"id": 1, "name": "Ann"})]), false);
		grid.column("id");
		Ok(())
	})
	.unwrap();

	table
		.extend(|grid| {
			grid.layout("admin/users.html");
			grid.column("name");
			Ok(())
		})
		.unwrap();

	assert_eq!(table.render().unwrap(), "[id=1;name=Ann;]");
}

#[rstest]
fn test_render_missing_view_fails(env: Environment) {
	let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(vec![json!({})]), false);
		grid.layout("missing.html");
		Ok(())
	})
	.unwrap();

	assert!(matches!(table.render(), Err(TableError::Core(_))));
}

#[rstest]
fn test_make_propagates_configuration_errors(env: Environment) {
	let result = TableBuilder::<Value>::make(&env, QueryParams::new(), |grid| {
		grid.with(Model::Rows(vec![]), false);
		grid.search(&["name"])?;
		Ok(())
	});

	assert!(matches!(result, Err(TableError::QueryBuilderRequired(_))));
}
