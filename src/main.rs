//! # cvforme CLI
//!
//! Usage:
//!   cvforme resume.json -o document.json
//!   cvforme resume.json --format format.json --theme modern
//!   cat resume.json | cvforme -
//!   cvforme resume.json --file-name
//!   cvforme --example > resume.json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, info};

use cvforme::export::{parse_format, parse_resume};
use cvforme::{file_name_today, Composer, CvError, ThemeKind};

#[derive(Parser, Debug)]
#[command(name = "cvforme", version, about = "Compose a résumé into a page-native document tree")]
struct Args {
    /// Résumé JSON file, or `-` for stdin
    #[arg(required_unless_present = "example")]
    resume: Option<PathBuf>,

    /// Format JSON file (defaults apply when omitted)
    #[arg(long)]
    format: Option<PathBuf>,

    /// classic or modern. Falls back to the format's `theme`
    #[arg(long)]
    theme: Option<String>,

    /// Output path for the document JSON (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the suggested PDF file name instead of composing
    #[arg(long)]
    file_name: bool,

    /// Print an example résumé
    #[arg(long)]
    example: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cvforme=info"))
        .init();

    let args = Args::parse();
    if args.example {
        print!("{}", example_resume_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CvError> {
    let input = match args.resume.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let resume = parse_resume(&input)?;

    if args.file_name {
        println!("{}", file_name_today(&resume));
        return Ok(());
    }

    let format_json = args.format.as_deref().map(fs::read_to_string).transpose()?;
    let format = parse_format(format_json.as_deref())?;

    let theme_label = args.theme.as_deref().unwrap_or(format.theme.as_str());
    let theme = ThemeKind::from_label(theme_label).unwrap_or_else(|| {
        debug!("Unknown theme {:?}, using classic", theme_label);
        ThemeKind::Classic
    });

    let document = Composer::new(theme).compose(&resume, &format);
    let json = serde_json::to_string_pretty(&document).map_err(CvError::Serialize)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            info!(
                "✓ Written {} sections ({} bytes) to {}",
                document.section_ids().len(),
                json.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn example_resume_json() -> &'static str {
    r##"{
  "id": "r-1",
  "title": "Jane Doe",
  "subtitle": "Senior Platform Engineer",
  "overview": "<p>Ten years building <strong>reliable</strong> distributed systems.</p>",
  "information": [
    { "id": "i1", "label": "Email", "value": "jane@example.com" },
    { "id": "i2", "label": "Phone", "value": "+1 555 0100" },
    { "id": "i3", "label": "Website", "value": "https://jane.dev" },
    { "id": "i4", "label": "City", "value": "Boston, MA" }
  ],
  "skills": [
    { "id": "s1", "label": "Languages", "value": "Rust, Go, TypeScript" },
    { "id": "s2", "label": "Infrastructure", "value": "Kubernetes, Terraform, Postgres" }
  ],
  "educations": [
    {
      "id": "e1",
      "school": "MIT",
      "degree": "BSc",
      "major": "CS",
      "startDate": "2012-09-01",
      "endDate": "2016-06-01"
    }
  ],
  "workExperiences": [
    {
      "id": "w1",
      "company": "Acme Corp",
      "position": "Staff Engineer",
      "description": "<ul><li>Led the storage team</li><li>Cut p99 latency by <em>40%</em></li></ul>",
      "startDate": "2019-01-01",
      "endDate": null
    }
  ],
  "projects": [
    {
      "id": "p1",
      "title": "Ledger",
      "subtitle": "Event-sourced bookkeeping",
      "details": "<p>Double-entry ledger with audit trails.</p>",
      "technologies": "Rust, Postgres, Kafka",
      "position": "Lead",
      "responsibilities": "Architecture, code review",
      "domain": "Fintech",
      "demo": "https://ledger.example.com"
    }
  ],
  "certifications": [
    { "id": "c1", "name": "CKA", "issuer": "CNCF", "date": "2022-11-03" }
  ],
  "languages": [
    { "id": "l1", "name": "English", "proficiency": "Native" },
    { "id": "l2", "name": "French", "proficiency": "B2" }
  ]
}
"##
}
