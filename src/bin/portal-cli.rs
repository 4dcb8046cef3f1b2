use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

use tool_portal::catalog::{url_for_tool, Catalog, Category};
use tool_portal::routing::{classify, translate_path, RouteDecision};
use tool_portal::Locale;

#[derive(Parser)]
#[command(name = "portal-cli")]
#[command(about = "Inspect the tool portal's catalog and locale routing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List canonical URLs of every ready tool
    Routes {
        /// Only this locale
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Translate a path between locales
    Translate {
        path: String,
        #[arg(long, default_value = "pl")]
        from: Locale,
        #[arg(long, default_value = "en")]
        to: Locale,
    },
    /// Show how the routing middleware treats a path or URL
    Classify { target: String },
    /// Check the catalog for slug collisions
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Routes { locale } => {
            let locales: Vec<Locale> = match locale {
                Some(l) => vec![l],
                None => Locale::ALL.to_vec(),
            };
            let catalog = Catalog::get();
            let mut routes = Vec::new();
            for locale in locales {
                for category in Category::ALL {
                    for tool in catalog.ready_tools_in(category) {
                        routes.push(json!({
                            "locale": locale,
                            "tool": tool.id,
                            "url": url_for_tool(tool, locale),
                        }));
                    }
                }
            }
            print_json(&Value::Array(routes))?;
        }
        Commands::Translate { path, from, to } => {
            print_json(&json!({
                "from": from,
                "to": to,
                "path": translate_path(&path, from, to),
            }))?;
        }
        Commands::Classify { target } => {
            let path = path_of(&target)?;
            let decision = match classify(&path) {
                RouteDecision::Redirect { location } => {
                    json!({ "action": "redirect", "status": 301, "location": location })
                }
                RouteDecision::PassThrough { locale } => {
                    json!({ "action": "pass_through", "status": 200, "locale": locale })
                }
                RouteDecision::Rewrite { path, locale } => {
                    json!({ "action": "rewrite", "status": 200, "path": path, "locale": locale })
                }
            };
            print_json(&json!({ "path": path, "decision": decision }))?;
        }
        Commands::Check => match Catalog::get().validate() {
            Ok(()) => println!("catalog ok"),
            Err(errors) => {
                for error in &errors {
                    eprintln!("error: {}", error);
                }
                return Err(format!("{} catalog error(s)", errors.len()).into());
            }
        },
    }

    Ok(())
}

/// Accept either a bare path or an absolute URL.
fn path_of(target: &str) -> Result<String, url::ParseError> {
    if target.starts_with('/') {
        return Ok(target.split(['?', '#']).next().unwrap_or(target).to_string());
    }
    Ok(Url::parse(target)?.path().to_string())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
