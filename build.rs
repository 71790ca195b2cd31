use std::env;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

/*
 * Hand curated constellation figures,
 * described by their Bright Star Catalogue names
 */
#[derive(Deserialize)]
struct FigureDBEntry<'a> {
    #[serde(default, borrow)]
    pub name: Option<&'a str>,
    #[serde(borrow)]
    pub stars: Vec<&'a str>,
}

/*
 * Prominent stars, annotated on the chart
 */
#[derive(Deserialize)]
struct LabelDBEntry<'a> {
    pub star: &'a str,
    pub label: &'a str,
}

fn build_figures_table() {
    let outdir = env::var("OUT_DIR").unwrap();
    let path = Path::new(&outdir).join("figures.rs");
    let mut fd = std::fs::File::create(path).unwrap();

    // read descriptors: parse and dump into static arrays
    let figures_content = std::fs::read_to_string("data/figures.json").unwrap();
    let figures_db: Vec<FigureDBEntry> = serde_json::from_str(&figures_content).unwrap();

    let labels_content = std::fs::read_to_string("data/labels.json").unwrap();
    let labels_db: Vec<LabelDBEntry> = serde_json::from_str(&labels_content).unwrap();

    let content = "use lazy_static::lazy_static;

#[derive(Debug)]
pub(crate) struct FigureHelper<'a> {
    name: Option<&'a str>,
    stars: &'a [&'a str],
}

#[derive(Debug)]
pub(crate) struct LabelHelper<'a> {
    star: &'a str,
    label: &'a str,
}

lazy_static! {
    static ref FIGURE_TABLE: Vec<FigureHelper<'static>> = vec![
\n";

    fd.write_all(content.as_bytes()).unwrap();

    for e in figures_db {
        // empty figures are rejected here, rather than at runtime
        assert!(!e.stars.is_empty(), "data/figures.json: empty figure");
        let name = match e.name {
            Some(name) => format!("Some(\"{}\")", name),
            None => "None".to_string(),
        };
        let stars = e
            .stars
            .iter()
            .map(|star| format!("\"{}\"", star))
            .collect::<Vec<_>>()
            .join(", ");
        fd.write_all(
            format!(
                "FigureHelper {{
                name: {},
                stars: &[{}],
            }},",
                name, stars,
            )
            .as_bytes(),
        )
        .unwrap()
    }

    fd.write_all("    ];\n".as_bytes()).unwrap();
    fd.write_all("    static ref LABEL_TABLE: Vec<LabelHelper<'static>> = vec![\n".as_bytes())
        .unwrap();

    for e in labels_db {
        fd.write_all(
            format!(
                "LabelHelper {{
                star: \"{}\",
                label: \"{}\",
            }},",
                e.star, e.label,
            )
            .as_bytes(),
        )
        .unwrap()
    }

    fd.write_all("    ];".as_bytes()).unwrap();
    fd.write_all("}\n".as_bytes()).unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=data/figures.json");
    println!("cargo:rerun-if-changed=data/labels.json");
    build_figures_table();
}
