use super::defaults;
use super::errors::ConfigError;
use super::models::EndpointSettings;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

type Result<T> = std::result::Result<T, ConfigError>;

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<linkdrop_events::EventBus>>,
) -> Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;

    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(linkdrop_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

/// Fills in every missing section and field, returning what was added
fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_http_section(doc, &mut added_fields)?;
    migrate_upload_section(doc, &mut added_fields)?;
    migrate_providers_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(doc: &mut DocumentMut, added_fields: &mut Vec<String>) -> Result<()> {
    let server = ensure_table(doc.as_table_mut(), "server", "server", added_fields)?;

    ensure_field(server, "server", "host", Value::from(defaults::host()), added_fields);
    ensure_field(server, "server", "port", Value::from(i64::from(defaults::port())), added_fields);
    ensure_field(
        server,
        "server",
        "timeout_secs",
        Value::from(defaults::timeout_secs() as i64),
        added_fields,
    );
    ensure_field(
        server,
        "server",
        "max_concurrent_requests",
        Value::from(defaults::max_concurrent_requests() as i64),
        added_fields,
    );
    ensure_field(
        server,
        "server",
        "max_body_size_mb",
        Value::from(defaults::max_body_size() as i64),
        added_fields,
    );
    ensure_field(
        server,
        "server",
        "enable_compression",
        Value::from(defaults::enable_compression()),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        for origin in defaults::allowed_origins() {
            arr.push(origin);
        }
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_http_section(doc: &mut DocumentMut, added_fields: &mut Vec<String>) -> Result<()> {
    let http = ensure_table(doc.as_table_mut(), "http", "http", added_fields)?;

    ensure_field(http, "http", "user_agent", Value::from(defaults::user_agent()), added_fields);
    ensure_field(
        http,
        "http",
        "probe_timeout_secs",
        Value::from(defaults::probe_timeout_secs() as i64),
        added_fields,
    );

    Ok(())
}

fn migrate_upload_section(doc: &mut DocumentMut, added_fields: &mut Vec<String>) -> Result<()> {
    let upload = ensure_table(doc.as_table_mut(), "upload", "upload", added_fields)?;

    ensure_field(upload, "upload", "default_mode", Value::from(defaults::default_mode()), added_fields);
    ensure_field(
        upload,
        "upload",
        "default_expiry",
        Value::from(defaults::default_expiry()),
        added_fields,
    );

    if !upload.contains_key("auto_order") {
        let mut arr = Array::new();
        for kind in defaults::auto_order() {
            arr.push(kind.name());
        }
        upload["auto_order"] = Item::Value(Value::Array(arr));
        added_fields.push("upload.auto_order".to_string());
    }

    Ok(())
}

fn migrate_providers_section(doc: &mut DocumentMut, added_fields: &mut Vec<String>) -> Result<()> {
    let providers = ensure_table(doc.as_table_mut(), "providers", "providers", added_fields)?;

    let entries = [
        ("catbox", defaults::catbox()),
        ("litterbox", defaults::litterbox()),
        ("pixeldrain", defaults::pixeldrain()),
        ("0x0", defaults::zero_x0()),
        ("transfer.sh", defaults::transfer_sh()),
    ];

    for (name, settings) in entries {
        let path = format!("providers.{}", name);
        let table = ensure_table(providers, name, &path, added_fields)?;
        table.set_implicit(false);
        migrate_endpoint(table, &path, &settings, added_fields);
    }

    Ok(())
}

fn migrate_endpoint(
    table: &mut Table,
    path: &str,
    settings: &EndpointSettings,
    added_fields: &mut Vec<String>,
) {
    ensure_field(table, path, "endpoint", Value::from(settings.endpoint.as_str()), added_fields);
    ensure_field(
        table,
        path,
        "timeout_secs",
        Value::from(settings.timeout_secs as i64),
        added_fields,
    );
    if let Some(public_base) = &settings.public_base {
        ensure_field(table, path, "public_base", Value::from(public_base.as_str()), added_fields);
    }
}

fn ensure_table<'a>(
    parent: &'a mut Table,
    key: &str,
    path: &str,
    added_fields: &mut Vec<String>,
) -> Result<&'a mut Table> {
    if !parent.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        parent.insert(key, Item::Table(table));
        added_fields.push(path.to_string());
    }

    parent[key]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError(format!("Invalid [{}] section in config", path)))
}

fn ensure_field(
    table: &mut Table,
    path: &str,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(format!("{}.{}", path, key));
    }
}
