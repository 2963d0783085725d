use std::fmt;

use comfy_table::{modifiers, presets, Cell, Color, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::models::{ApplicationSummary, DatabaseSummary};
use crate::utils::app_url;

pub const NO_APPLICATIONS: &str = "You have no applications";
pub const NO_DATABASES: &str = "You have no databases";
pub const NO_PUBLIC_APPLICATIONS: &str = "This user has no public applications";

/// Action offered next to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    MakePublic,
    MakePrivate,
    /// Shown but not available yet.
    Export,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Delete => "Delete",
            RowAction::MakePublic => "Make public",
            RowAction::MakePrivate => "Make private",
            RowAction::Export => "Export",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, RowAction::Export)
    }
}

/// One rendered entry, keyed by its container id.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    pub id: String,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Placeholder(&'static str),
    Rows {
        header: Vec<&'static str>,
        rows: Vec<ListRow>,
    },
}

impl Listing {
    fn from_rows(placeholder: &'static str, header: Vec<&'static str>, rows: Vec<ListRow>) -> Self {
        if rows.is_empty() {
            Listing::Placeholder(placeholder)
        } else {
            Listing::Rows { header, rows }
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn rows(&self) -> &[ListRow] {
        match self {
            Listing::Placeholder(_) => &[],
            Listing::Rows { rows, .. } => rows,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Listing::Placeholder(_))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows().iter().map(|r| r.id.as_str()).collect()
    }

    fn table(header: &[&'static str], rows: &[ListRow]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some((Width(w), _)) = terminal_size() {
            table.set_width(w.saturating_sub(4));
        }

        let with_actions = rows.iter().any(|r| !r.actions.is_empty());
        let mut head: Vec<Cell> = header.iter().map(|h| Cell::new(h)).collect();
        if with_actions {
            head.push(Cell::new("Actions"));
        }
        table.set_header(head);

        for row in rows {
            let mut cells: Vec<Cell> = row.cells.iter().map(Cell::new).collect();
            if with_actions {
                let labels = row
                    .actions
                    .iter()
                    .map(|a| if a.is_enabled() { a.label().to_string() } else { format!("({})", a.label()) })
                    .collect::<Vec<_>>()
                    .join(", ");
                cells.push(Cell::new(labels).fg(Color::DarkGrey));
            }
            table.add_row(cells);
        }
        table
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Placeholder(text) => write!(f, "{}", text),
            Listing::Rows { header, rows } => write!(f, "{}", Self::table(header, rows)),
        }
    }
}

fn visibility(app: &ApplicationSummary) -> &'static str {
    if app.is_public {
        "public"
    } else {
        "private"
    }
}

/// The user's applications, with delete and publish toggles.
pub fn application_listing(apps: Option<&[ApplicationSummary]>, app_host: &str) -> Listing {
    let rows = apps
        .unwrap_or_default()
        .iter()
        .map(|app| ListRow {
            id: app.container_id.clone(),
            cells: vec![
                app.container_id.clone(),
                app.name.clone(),
                app.description.clone(),
                app_url(app_host, &app.external_port),
                visibility(app).to_string(),
            ],
            actions: vec![
                RowAction::Delete,
                if app.is_public { RowAction::MakePrivate } else { RowAction::MakePublic },
            ],
        })
        .collect();
    Listing::from_rows(NO_APPLICATIONS, vec!["ID", "Name", "Description", "URL", "Visibility"], rows)
}

pub fn database_listing(dbs: Option<&[DatabaseSummary]>) -> Listing {
    let rows = dbs
        .unwrap_or_default()
        .iter()
        .map(|db| ListRow {
            id: db.container_id.clone(),
            cells: vec![db.container_id.clone(), db.name.clone()],
            actions: vec![RowAction::Delete, RowAction::Export],
        })
        .collect();
    Listing::from_rows(NO_DATABASES, vec!["ID", "Name"], rows)
}

/// Read-only listing shown to visitors of a user's public page.
pub fn public_application_listing(apps: Option<&[ApplicationSummary]>, app_host: &str) -> Listing {
    let rows = apps
        .unwrap_or_default()
        .iter()
        .map(|app| ListRow {
            id: app.container_id.clone(),
            cells: vec![
                app.name.clone(),
                app.description.clone(),
                app_url(app_host, &app.external_port),
            ],
            actions: Vec::new(),
        })
        .collect();
    Listing::from_rows(NO_PUBLIC_APPLICATIONS, vec!["Name", "Description", "URL"], rows)
}
