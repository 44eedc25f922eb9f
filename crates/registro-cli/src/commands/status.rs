//! Status command handler

use anyhow::Result;

use registro_core::{filter, Config, DocumentState, DocumentStore, FilterSpec};

use crate::output::{Output, OutputFormat};

/// Document counts for the status report
#[derive(Debug, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub by_category: Vec<(String, usize)>,
    pub activos: usize,
    pub inactivos: usize,
}

impl Counts {
    pub fn collect(store: &DocumentStore) -> Self {
        let by_category = store
            .hierarchy()
            .list_categories()
            .iter()
            .map(|c| {
                let spec = FilterSpec::new().with_category(*c);
                (c.to_string(), filter::apply(store.list(), &spec).len())
            })
            .collect();

        let activos = store
            .list()
            .iter()
            .filter(|d| d.estado == DocumentState::Activo)
            .count();

        Self {
            total: store.len(),
            by_category,
            activos,
            inactivos: store.len() - activos,
        }
    }
}

/// Show status information
pub fn show(store: &DocumentStore, config: &Config, output: &Output) -> Result<()> {
    let counts = Counts::collect(store);

    match output.format {
        OutputFormat::Json => {
            let by_category: serde_json::Map<String, serde_json::Value> = counts
                .by_category
                .iter()
                .map(|(c, n)| (c.clone(), serde_json::json!(n)))
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "backend": store.backend(),
                    "storage": config.storage,
                    "location": config.storage_path(),
                    "page_size": config.page_size,
                    "counts": {
                        "total": counts.total,
                        "by_category": by_category,
                        "activo": counts.activos,
                        "inactivo": counts.inactivos
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", counts.total);
        }
        OutputFormat::Human => {
            println!("Registro Status");
            println!("===============");
            println!();
            println!("Storage:");
            println!("  Backend:  {}", store.backend());
            println!("  Location: {}", config.storage_path().display());
            println!();
            println!("Documents: {}", counts.total);
            for (category, n) in &counts.by_category {
                println!("  {:<15} {}", category, n);
            }
            println!();
            println!("  Activo:   {}", counts.activos);
            println!("  Inactivo: {}", counts.inactivos);
        }
    }

    Ok(())
}
