use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use moat_core::seed::{demo_records, DEMO_PEOPLE};
use orcid::xml::{self, schema, XmlDocument};
use orcid::{Employment, Person, Record, Search, Work};
use std::fmt::Debug;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moat")]
#[command(about = "Mock ORCID v3.0 service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo identifiers served by the mock
    List,
    /// Render a demo record
    Show {
        /// ORCID iD, e.g. 0000-0001-2345-6789
        orcid: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
        format: OutputFormat,
        /// Render only the person section
        #[arg(long)]
        person: bool,
    },
    /// Decode an XML document, re-encode it and compare the two
    CheckXml {
        /// Path to the XML document
        file: PathBuf,
        /// Document kind (inferred from the root element when omitted)
        #[arg(long, value_enum)]
        kind: Option<DocumentKind>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Xml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DocumentKind {
    Record,
    Person,
    Search,
    Work,
    Employment,
}

impl DocumentKind {
    fn from_root(root: &xml::Element) -> Option<Self> {
        [
            (Record::ROOT, DocumentKind::Record),
            (Person::ROOT, DocumentKind::Person),
            (Search::ROOT, DocumentKind::Search),
            (Work::ROOT, DocumentKind::Work),
            (Employment::ROOT, DocumentKind::Employment),
        ]
        .into_iter()
        .find(|((namespace, name), _)| root.is(*namespace, name))
        .map(|(_, kind)| kind)
    }
}

/// Outcome of decoding and re-encoding one document.
#[derive(Debug)]
struct CheckReport {
    kind: DocumentKind,
    canonical: String,
    /// First difference between the input and its canonical encoding, if any.
    input_diff: Option<String>,
    /// Ordering problem in the input itself, if any.
    sequence_note: Option<String>,
}

fn round_trip<D>(input: &str) -> anyhow::Result<String>
where
    D: XmlDocument + PartialEq + Debug,
{
    let decoded: D = xml::from_str(input).context("decode failed")?;
    let canonical = xml::to_string(&decoded).context("encode failed")?;
    let again: D = xml::from_str(&canonical).context("re-decode of canonical form failed")?;
    if again != decoded {
        bail!("decoded value changed after re-encoding");
    }
    let reencoded = xml::to_string(&again).context("encode failed")?;
    if let Some(diff) = xml::semantic_diff(&canonical, &reencoded)? {
        bail!("canonical form is not stable: {diff}");
    }
    Ok(canonical)
}

fn check_xml(input: &str, kind: Option<DocumentKind>) -> anyhow::Result<CheckReport> {
    let root = xml::parse(input).context("not a well-formed ORCID document")?;
    let kind = match kind {
        Some(kind) => kind,
        None => DocumentKind::from_root(&root).with_context(|| {
            format!("cannot infer document kind from root <{}>", root.qualified())
        })?,
    };
    let sequence_note = schema::check_sequence(&root).err().map(|e| e.to_string());

    let canonical = match kind {
        DocumentKind::Record => round_trip::<Record>(input)?,
        DocumentKind::Person => round_trip::<Person>(input)?,
        DocumentKind::Search => round_trip::<Search>(input)?,
        DocumentKind::Work => round_trip::<Work>(input)?,
        DocumentKind::Employment => round_trip::<Employment>(input)?,
    };
    let input_diff = xml::semantic_diff(input, &canonical)?;

    Ok(CheckReport {
        kind,
        canonical,
        input_diff,
        sequence_note,
    })
}

fn show(orcid: &str, format: OutputFormat, person_only: bool) -> anyhow::Result<String> {
    let Some(record) = demo_records()
        .into_iter()
        .find(|r| r.orcid_identifier.path == orcid)
    else {
        bail!("no demo record for {orcid}");
    };

    let rendered = match (format, person_only) {
        (OutputFormat::Json, false) => {
            serde_json::to_string_pretty(&orcid::json::to_value(&record)?)?
        }
        (OutputFormat::Json, true) => {
            serde_json::to_string_pretty(&orcid::json::to_value(&record.person)?)?
        }
        (OutputFormat::Xml, false) => xml::to_document(&record)?,
        (OutputFormat::Xml, true) => xml::to_document(&record.person)?,
    };
    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            for person in &DEMO_PEOPLE {
                println!("{}  {} {}", person.orcid, person.given, person.family);
            }
        }
        Some(Commands::Show {
            orcid,
            format,
            person,
        }) => {
            println!("{}", show(&orcid, format, person)?);
        }
        Some(Commands::CheckXml { file, kind }) => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let report = check_xml(&input, kind)?;
            println!("{}: decoded as {:?}", file.display(), report.kind);
            if let Some(note) = &report.sequence_note {
                println!("note: input children are not in canonical order: {note}");
            }
            match &report.input_diff {
                None => println!("input is semantically equal to its canonical encoding"),
                Some(diff) => println!("input differs from its canonical encoding at {diff}"),
            }
            println!("round trip OK ({} bytes canonical)", report.canonical.len());
        }
        None => {
            println!("Use 'moat --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orcid::xml::Namespace;
    use orcid::PutCode;

    const SOFIA: &str = "0000-0001-2345-6789";

    #[test]
    fn kind_is_inferred_from_the_root() {
        let xml_doc = show(SOFIA, OutputFormat::Xml, true).expect("show");
        let report = check_xml(&xml_doc, None).expect("check");
        assert_eq!(report.kind, DocumentKind::Person);
        assert_eq!(report.input_diff, None);
        assert_eq!(report.sequence_note, None);
    }

    #[test]
    fn canonical_documents_check_clean() {
        let xml_doc = show(SOFIA, OutputFormat::Xml, false).expect("show");
        let report = check_xml(&xml_doc, Some(DocumentKind::Record)).expect("check");
        assert_eq!(report.kind, DocumentKind::Record);
        assert_eq!(report.input_diff, None);
    }

    #[test]
    fn wrong_kind_is_an_error() {
        let xml_doc = show(SOFIA, OutputFormat::Xml, true).expect("show");
        assert!(check_xml(&xml_doc, Some(DocumentKind::Record)).is_err());
    }

    #[test]
    fn reordered_input_is_reported_but_round_trips() {
        let work = moat_core::activity::generic_work(PutCode::new(9));
        let canonical = xml::to_string(&work).expect("encode");
        let date_start = canonical.find("<common:publication-date").expect("date");
        let date_end = canonical.find("</common:publication-date>").expect("date end")
            + "</common:publication-date>".len();
        let title_start = canonical.find("<work:title").expect("title");
        let date = &canonical[date_start..date_end];
        let mut shuffled = canonical.clone();
        shuffled.replace_range(date_start..date_end, "");
        shuffled.insert_str(title_start, date);

        let report = check_xml(&shuffled, None).expect("check");
        assert_eq!(report.kind, DocumentKind::Work);
        assert!(report.sequence_note.is_some());
        assert!(report.input_diff.is_some());
        assert_eq!(report.canonical, canonical);
    }

    #[test]
    fn unknown_root_cannot_be_inferred() {
        let doc = r#"<common:response xmlns:common="http://www.orcid.org/ns/common" put-code="1"/>"#;
        assert!(check_xml(doc, None).is_err());
    }

    #[test]
    fn show_json_and_unknown_ids() {
        let json = show(SOFIA, OutputFormat::Json, false).expect("show");
        assert!(json.contains("\"orcid-identifier\""));
        assert!(show("9999-9999-9999-9999", OutputFormat::Json, false).is_err());
    }

    #[test]
    fn namespace_table_covers_document_roots() {
        assert_eq!(Record::ROOT.0, Namespace::Record);
        assert_eq!(Search::ROOT.0, Namespace::Search);
    }
}
