use std::path::PathBuf;
use std::sync::Arc;

use api_shared::{DiagnoseRes, HealthService};
use clap::{Parser, Subcommand};
use medicare_core::constants::DEFAULT_SUGGESTION_LIMIT;
use medicare_core::{CoreConfig, Diagnosis, DiagnosisService, InMemoryCatalog};

#[derive(Parser)]
#[command(name = "medicare")]
#[command(about = "MediCare symptom diagnosis CLI")]
struct Cli {
    /// YAML disease catalog (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalog health
    Health,
    /// List all known symptoms
    Symptoms,
    /// Suggest symptoms containing a fragment
    Suggest {
        /// Fragment to search for (case-insensitive)
        query: String,
        /// Maximum number of suggestions
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// List all diseases
    Diseases,
    /// Rank diseases against reported symptoms
    Diagnose {
        /// Symptom tokens, space or comma separated
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Only show the best N results
        #[arg(long)]
        top: Option<usize>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'medicare --help' for commands");
        return Ok(());
    };

    let limit = match &command {
        Commands::Suggest { limit, .. } => *limit,
        _ => DEFAULT_SUGGESTION_LIMIT,
    };
    let service = build_service(cli.catalog, limit)?;

    match command {
        Commands::Health => {
            let res = HealthService::check_health(service.catalog_status());
            println!(
                "{} ({} diseases, {} symptoms)",
                res.message, res.diseases, res.symptoms
            );
        }
        Commands::Symptoms => {
            for symptom in service.list_symptoms()? {
                println!("{}", symptom);
            }
        }
        Commands::Suggest { query, .. } => {
            let suggestions = service.suggest_symptoms(&query)?;
            if suggestions.is_empty() {
                println!("No symptoms match '{}'.", query.trim());
            }
            for symptom in suggestions {
                println!("{}", symptom);
            }
        }
        Commands::Diseases => {
            for disease in service.list_diseases()? {
                println!("{:>3}  {:<25} {}", disease.id, disease.name, disease.description);
            }
        }
        Commands::Diagnose {
            symptoms,
            top,
            json,
        } => {
            let mut diagnosis = service.diagnose(split_symptoms(&symptoms))?;
            if let Some(n) = top {
                diagnosis.results.truncate(n);
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&DiagnoseRes::from(&diagnosis))?
                );
            } else {
                print!("{}", render_diagnosis(&diagnosis));
            }
        }
    }

    Ok(())
}

fn build_service(
    catalog_file: Option<PathBuf>,
    suggestion_limit: usize,
) -> Result<DiagnosisService, Box<dyn std::error::Error>> {
    let cfg = CoreConfig::new(catalog_file, suggestion_limit)?;
    let catalog = cfg.load_catalog()?;
    Ok(DiagnosisService::new(
        Arc::new(cfg),
        Arc::new(InMemoryCatalog::new(catalog)),
    ))
}

/// Splits comma-separated arguments so `fever,cough` and `fever cough` read the same.
fn split_symptoms(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn render_diagnosis(diagnosis: &Diagnosis) -> String {
    if diagnosis.is_empty() {
        return "No diagnosis found.\n".to_string();
    }

    let mut out = String::new();
    for (rank, result) in diagnosis.results.iter().enumerate() {
        let matched: Vec<&str> = result.matched_symptoms.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!(
            "{}. {} - score {:.2} (disease {:.2}%, patient {:.2}%)\n",
            rank + 1,
            result.disease.name,
            result.weighted_score,
            result.disease_match_pct,
            result.patient_match_pct
        ));
        out.push_str(&format!("   matched: {}\n", matched.join(", ")));
        for medicine in &result.medicines {
            out.push_str(&format!("   medicine: {} ({})\n", medicine.name, medicine.dosage));
        }
        for precaution in &result.precautions {
            out.push_str(&format!("   precaution: {}\n", precaution));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_symptoms_are_split() {
        let args = vec!["fever, dry_cough".to_string(), "fatigue".to_string(), ",".to_string()];
        assert_eq!(split_symptoms(&args), ["fever", "dry_cough", "fatigue"]);
    }

    #[test]
    fn diagnose_renders_ranked_results() {
        let service = build_service(None, DEFAULT_SUGGESTION_LIMIT).unwrap();
        let diagnosis = service
            .diagnose(["fever", "dry_cough", "fatigue", "chest_pain"])
            .unwrap();

        let text = render_diagnosis(&diagnosis);
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "1. Pneumonia - score 65.00 (disease 50.00%, patient 100.00%)"
        );
        assert!(text.contains("   medicine: Azithromycin (500mg once daily for 3-5 days)"));
    }

    #[test]
    fn empty_diagnosis_says_so() {
        let text = render_diagnosis(&Diagnosis {
            symptoms: vec![],
            results: vec![],
        });
        assert_eq!(text, "No diagnosis found.\n");
    }

    #[test]
    fn cli_parses_global_catalog_flag() {
        let cli = Cli::try_parse_from([
            "medicare",
            "diagnose",
            "fever",
            "--top",
            "2",
            "--catalog",
            "diseases.yaml",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("diseases.yaml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Diagnose { top: Some(2), json: false, .. })
        ));
    }

    #[test]
    fn unknown_catalog_file_is_an_error() {
        assert!(build_service(Some(PathBuf::from("/nonexistent/catalog.yaml")), 10).is_err());
    }
}
