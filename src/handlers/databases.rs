use ipaas::api;
use ipaas::models::NewDatabaseForm;
use ipaas::render::database_listing;
use yansi::Paint;

use super::helpers::{abort, build_session_client, spinner, unwrap_or_fail};
use crate::wizard;

pub async fn list() {
    let client = build_session_client().await;
    let dbs = unwrap_or_fail("Failed to load databases", api::load_databases(&client).await);
    println!("\n{}\n", database_listing(dbs.as_deref()));
}

pub async fn create(form: NewDatabaseForm) {
    let client = build_session_client().await;
    let form = if form.name.trim().is_empty() || form.dbms.trim().is_empty() {
        match wizard::database_form(form).await {
            Ok(form) => form,
            Err(e) => abort("Could not read the form", &e),
        }
    } else {
        form
    };

    let request = unwrap_or_fail("Invalid database", form.into_request());
    let pb = spinner("Starting the database");
    let result = api::create_database(&client, &request).await;
    pb.finish_and_clear();
    let db = unwrap_or_fail("Failed to create the database", result);

    println!("{}", Paint::green("Database created successfully"));
    println!(
        "{}",
        Paint::yellow(db.important.as_deref().unwrap_or("The credentials below are for the root account"))
    );
    println!("{:<10}{}", "User:", Paint::cyan(&db.user));
    println!("{:<10}{}", "Password:", Paint::cyan(&db.pass));
    println!("{:<10}{}", "Port:", Paint::cyan(&db.port));
    if let Some(uri) = &db.uri {
        println!("{:<10}{}", "URI:", Paint::cyan(uri));
    }
}
