//! Terminal entry point: prompts for a dream job and current skills, then
//! prints the gap analysis and per-region salary data.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dreamjob_api::analysis::analyze;
use dreamjob_api::cache::TtlCache;
use dreamjob_api::catalog::subjects::default_subjects_for_title;
use dreamjob_api::catalog::{Region, SalaryCatalog, SubjectCatalog};
use dreamjob_api::config::Config;
use dreamjob_api::esco::{EscoClient, OccupationLookup};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== DreamJob Explorer ===\n");

    let job_title = prompt("Enter your dream job title: ")?;
    if job_title.is_empty() {
        println!("No job title given; nothing to do.");
        return Ok(());
    }

    let raw_skills = prompt("Enter your current skills (comma separated): ")?;
    let user_skills: Vec<String> = raw_skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let cache = Arc::new(TtlCache::new(Duration::from_secs(config.cache_ttl_secs)));
    let esco = EscoClient::new(config.esco_base_url.clone(), cache);

    let Some(occupation) = esco.search_occupation(&job_title).await else {
        println!("Sorry, no occupation found for '{job_title}' in the ESCO database.");
        return Ok(());
    };

    let required_skills = esco.required_skills(&occupation.uri).await;
    if required_skills.is_empty() {
        println!("No skill data found for '{job_title}'.");
        return Ok(());
    }

    let subjects = SubjectCatalog::load(&config.subjects_file);
    let salaries = SalaryCatalog::load(&config.salary_file);

    let result = analyze(&required_skills, &user_skills, &subjects);
    let recommended: Vec<String> = if result.recommended_subjects.is_empty()
        && !result.missing_skills.is_empty()
    {
        default_subjects_for_title(&job_title)
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        result.recommended_subjects.iter().cloned().collect()
    };

    println!("\n--- Analysis Results ---");
    println!("Dream Job: {job_title}");
    println!("Required Skills: {}", required_skills.join(", "));
    println!("Your Skills: {}", user_skills.join(", "));
    println!("Missing Skills: {}", result.missing_skills.join(", "));
    println!("Recommended Subjects: {}", recommended.join(", "));

    println!("\n--- Expected Salary ---");
    for region in Region::ALL {
        let range = salaries.get(&job_title, region);
        let label = capitalize(region.as_str());
        match (range.min, range.max, range.currency.as_deref()) {
            (Some(min), Some(max), Some(currency)) => {
                println!("{label}: {min} - {max} {currency}");
            }
            _ => println!("{label}: Data not available"),
        }
    }

    println!("\nThank you for using DreamJob Explorer!");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
