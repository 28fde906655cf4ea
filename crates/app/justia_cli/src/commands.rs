use std::io::Write;

use justia_core::data::{CourtCaseRecord, ReferenceData};
use justia_core::mock;

use crate::Result;
use crate::cli::Commands;

pub fn execute(command: &Commands, data: &ReferenceData, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Version => {
            writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        }
        Commands::Ask {
            message,
            language,
            state,
        } => {
            let reply = mock::generate(data, message, language, state.as_deref());
            writeln!(out, "{reply}")?;
        }
        Commands::States => {
            for s in data.states() {
                writeln!(out, "{:<14} {} ({})", s.id, s.name, s.high_court)?;
            }
        }
        Commands::CaseTypes => {
            for ct in data.case_types() {
                writeln!(
                    out,
                    "{:<20} {} {} ({}% success, ~{} days)",
                    ct.id, ct.icon, ct.name, ct.success_rate_percent, ct.avg_resolution_days
                )?;
            }
        }
        Commands::Documents { case_type } => {
            let ct = data.case_type(case_type)?;
            writeln!(out, "{} {}: documents to collect", ct.icon, ct.name)?;
            for (i, doc) in ct.required_documents.iter().enumerate() {
                writeln!(out, "{:>2}. {doc}", i + 1)?;
            }
        }
        Commands::Ngos { state, case_type } => {
            let found = data.search_ngos(state, case_type);
            for ngo in &found.ngos {
                writeln!(out, "{} | {} | {}", ngo.name, ngo.phone, ngo.url)?;
                if let Some(note) = &ngo.note {
                    writeln!(out, "    {note}")?;
                }
            }
            writeln!(out, "{} found, {} shown", found.total_found, found.ngos.len())?;
        }
        Commands::Lookup { case_number } => match data.find_court_case(case_number) {
            Some(record) => print_case(record, out)?,
            None => {
                writeln!(out, "Case {case_number} not found in our demo database.")?;
                writeln!(out, "Visit https://ecourts.gov.in for live case status.")?;
            }
        },
    }
    Ok(())
}

fn print_case(record: &CourtCaseRecord, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} at {}", record.case_number, record.court)?;
    writeln!(out, "{} vs {}", record.petitioner, record.respondent)?;
    writeln!(out, "Status: {} ({})", record.status, record.stage)?;
    writeln!(out, "Judge: {}", record.judge)?;
    writeln!(
        out,
        "Filed {}, last heard {}, next hearing {}",
        record.filed_date, record.last_hearing, record.next_hearing
    )?;
    for order in &record.orders {
        writeln!(out, "  {}  {}", order.date, order.order)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn run(command: Commands) -> Result<String> {
        let data = ReferenceData::embedded().expect("embedded tables load");
        let mut out = Vec::new();
        execute(&command, &data, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn ask_prints_rental_answer_with_state_act() {
        let out = run(Commands::Ask {
            message: "landlord kept my deposit".into(),
            language: "en".into(),
            state: Some("maharashtra".into()),
        })
        .expect("ask");
        assert!(out.contains("Maharashtra Rent Control Act, 1999"));
    }

    #[test]
    fn documents_for_unknown_case_type_fail() {
        let err = run(Commands::Documents {
            case_type: "piracy".into(),
        })
        .expect_err("unknown case type");
        assert!(matches!(err, Error::Lookup(_)));
        assert_eq!(err.to_string(), "Case type 'piracy' not found");
    }

    #[test]
    fn documents_are_numbered() {
        let out = run(Commands::Documents {
            case_type: "rental_deposit".into(),
        })
        .expect("documents");
        assert!(out.contains(" 1. Rent agreement / lease deed (original + copy)"));
    }

    #[test]
    fn ngos_reports_total() {
        let out = run(Commands::Ngos {
            state: "maharashtra".into(),
            case_type: "labour_wage".into(),
        })
        .expect("ngos");
        assert!(out.contains("NALSA (National Legal Services Authority) | 15100"));
        assert!(out.ends_with("6 found, 5 shown\n"));
    }

    #[test]
    fn lookup_prints_orders() {
        let out = run(Commands::Lookup {
            case_number: "wc/456".into(),
        })
        .expect("lookup");
        assert!(out.starts_with("WC/456/2024 at Labour Court, Bengaluru\n"));
        assert!(out.contains("Status: Pending (Conciliation)"));
    }

    #[test]
    fn lookup_miss_suggests_ecourts() {
        let out = run(Commands::Lookup {
            case_number: "ZZ/1/1999".into(),
        })
        .expect("lookup");
        assert!(out.contains("not found in our demo database"));
        assert!(out.contains("ecourts.gov.in"));
    }
}
