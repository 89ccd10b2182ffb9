//! Deterministic in-memory page source for demo mode and tests.
//!
//! `SampleSource` serves the same query grammar as the live endpoint
//! (free-text search, single-column sort, continuation links) over a
//! generated dataset, so the whole fetch/pagination path can run without
//! network access.

use crate::protocol::ProteinRow;
use crate::query::{decode_component, SortColumn, SortDir, SortSpec};
use crate::source::{Page, PageSource};
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Base endpoint understood by [`SampleSource`]; continuation links are
/// rebuilt against it with a `&cursor=<offset>` parameter.
pub const SAMPLE_BASE_URL: &str = "sample:";

const DEFAULT_ROWS: usize = 20_000;
const DEFAULT_PAGE_SIZE: usize = 500;
const DEFAULT_SEED: u64 = 42;

const GENE_STEMS: &[&str] = &[
    "INS", "GOT2", "ALB", "HBB", "TP53", "EGFR", "BRCA2", "CYTB", "ATP5F1", "RPL7", "MYC",
    "ACTB", "GAPDH", "CALM1", "HSP90", "UBC9", "SOD1", "CFTR", "PSMA2", "RECA",
];

// Organism names paired with the mnemonic used in entry names.
const ORGANISMS: &[(&str, &str)] = &[
    ("Homo sapiens", "HUMAN"),
    ("Mus musculus", "MOUSE"),
    ("Rattus norvegicus", "RAT"),
    ("Saccharomyces cerevisiae", "YEAST"),
    ("Escherichia coli", "ECOLI"),
    ("Danio rerio", "DANRE"),
    ("Arabidopsis thaliana", "ARATH"),
    ("Drosophila melanogaster", "DROME"),
];

const LOCATIONS: &[&str] = &[
    "Cytoplasm",
    "Nucleus",
    "Mitochondrion",
    "Cell membrane",
    "Endoplasmic reticulum membrane",
    "Secreted",
];

/// In-memory dataset paged through `sample:` continuation links.
pub struct SampleSource {
    rows: Vec<ProteinRow>,
    page_size: usize,
}

impl SampleSource {
    /// Generates `num_rows` entries from the given seed. The same seed
    /// always yields the same dataset.
    pub fn new(num_rows: usize, page_size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..num_rows).map(|i| generate_row(&mut rng, i)).collect();
        Self {
            rows,
            page_size: page_size.max(1),
        }
    }

    /// Total number of rows in the dataset, before any filtering.
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_PAGE_SIZE, DEFAULT_SEED)
    }
}

fn generate_row(rng: &mut StdRng, index: usize) -> ProteinRow {
    let stem = GENE_STEMS[rng.gen_range(0..GENE_STEMS.len())];
    let (organism, mnemonic) = ORGANISMS[rng.gen_range(0..ORGANISMS.len())];

    let mut genes = vec![format!("{}{}", stem, rng.gen_range(1..=9))];
    for _ in 0..rng.gen_range(0..=2usize) {
        genes.push(format!(
            "{}{}",
            GENE_STEMS[rng.gen_range(0..GENE_STEMS.len())],
            rng.gen_range(1..=9)
        ));
    }

    let location = if rng.gen_range(0..10) < 8 {
        Some(LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string())
    } else {
        None
    };

    ProteinRow {
        accession: format!("P{:05}", index),
        entry_name: format!("{}_{}", stem, mnemonic),
        genes,
        organism: organism.to_string(),
        location,
        length: Some(rng.gen_range(60..=3000)),
    }
}

impl PageSource for SampleSource {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        let request = parse_request(url)?;

        let needle = request.search.to_lowercase();
        let mut matched: Vec<&ProteinRow> = self
            .rows
            .iter()
            .filter(|row| needle.is_empty() || row_matches(row, &needle))
            .collect();

        if let Some(spec) = request.sort {
            matched.sort_by(|a, b| compare_rows(a, b, spec));
        }

        let start = request.offset.min(matched.len());
        let end = (start + self.page_size).min(matched.len());
        let next_link = if end < matched.len() {
            format!("{}&cursor={}", request.base_request, end)
        } else {
            String::new()
        };

        Ok(Page {
            rows: matched[start..end].iter().map(|row| (*row).clone()).collect(),
            next_link,
        })
    }
}

fn row_matches(row: &ProteinRow, needle: &str) -> bool {
    row.accession.to_lowercase().contains(needle)
        || row.entry_name.to_lowercase().contains(needle)
        || row.organism.to_lowercase().contains(needle)
        || row.genes.iter().any(|gene| gene.to_lowercase().contains(needle))
}

// The gene column sorts by the first gene label; rows without genes sort
// first, like rows without a sequence length.
fn compare_rows(a: &ProteinRow, b: &ProteinRow, spec: SortSpec) -> Ordering {
    let ordering = match spec.column {
        SortColumn::Accession => a.accession.cmp(&b.accession),
        SortColumn::EntryName => a.entry_name.cmp(&b.entry_name),
        SortColumn::Gene => a.genes.first().cmp(&b.genes.first()),
        SortColumn::OrganismName => a.organism.cmp(&b.organism),
        SortColumn::Length => a.length.cmp(&b.length),
    };
    match spec.dir {
        SortDir::Asc => ordering,
        SortDir::Desc => ordering.reverse(),
    }
}

struct SampleRequest {
    search: String,
    sort: Option<SortSpec>,
    offset: usize,
    /// The request URL with any `&cursor=` parameter stripped; continuation
    /// links are rebuilt from it so the chain stays self-contained.
    base_request: String,
}

fn parse_request(url: &str) -> Result<SampleRequest> {
    let Some(query_start) = url.find("query=(") else {
        bail!("unrecognized sample url: {url}");
    };
    let after = &url[query_start + "query=(".len()..];
    let Some(query_end) = after.find(')') else {
        bail!("unterminated query clause in sample url: {url}");
    };
    let search = decode_component(&after[..query_end]);

    let sort = url.find("&sort=").and_then(|at| {
        let token = url[at + "&sort=".len()..]
            .split('&')
            .next()
            .unwrap_or_default();
        let (field, dir) = token.split_once("%20")?;
        Some(SortSpec {
            column: SortColumn::from_api_field(field)?,
            dir: SortDir::from_api_token(dir)?,
        })
    });

    let (base_request, offset) = match url.find("&cursor=") {
        Some(at) => {
            let digits = url[at + "&cursor=".len()..]
                .split('&')
                .next()
                .unwrap_or_default();
            (url[..at].to_string(), digits.parse().unwrap_or(0))
        }
        None => (url.to_string(), 0),
    };

    Ok(SampleRequest {
        search,
        sort,
        offset,
        base_request,
    })
}
