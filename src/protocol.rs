//! Wire data model for the UniProtKB search endpoint.
//!
//! The REST response nests most row fields behind optional paths; the GUI
//! never consumes the raw entries directly but works with the flat
//! [`ProteinRow`] projection instead.

use serde::{Deserialize, Serialize};

/// Comment category carrying subcellular location annotations.
const SUBCELLULAR_LOCATION: &str = "SUBCELLULAR LOCATION";

/// Body of a search response: an ordered array of entries.
///
/// Unknown top-level fields (facets, suggestions, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ProteinEntry>,
}

/// One dataset entry as served by the API.
///
/// Every field except the primary accession may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinEntry {
    pub primary_accession: String,
    #[serde(default, rename = "uniProtkbId")]
    pub uniprot_kb_id: Option<String>,
    #[serde(default)]
    pub organism: Option<Organism>,
    #[serde(default)]
    pub genes: Option<Vec<Gene>>,
    #[serde(default)]
    pub sequence: Option<Sequence>,
    #[serde(default)]
    pub comments: Option<Vec<EntryComment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub scientific_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    #[serde(default)]
    pub gene_name: Option<GeneName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneName {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    pub length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryComment {
    pub comment_type: String,
    #[serde(default)]
    pub subcellular_locations: Option<Vec<SubcellularLocation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcellularLocation {
    #[serde(default)]
    pub location: Option<LocationValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationValue {
    pub value: String,
}

/// Flat row projection consumed by the results table.
///
/// The accession is the stable primary key; all other fields are display
/// data. An absent nested path degrades to an empty value, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRow {
    pub accession: String,
    pub entry_name: String,
    pub genes: Vec<String>,
    pub organism: String,
    pub location: Option<String>,
    pub length: Option<u32>,
}

impl ProteinRow {
    /// Projects a wire entry into a flat row.
    ///
    /// The subcellular location is the first location of the first comment
    /// whose category is `SUBCELLULAR LOCATION`.
    pub fn from_entry(entry: ProteinEntry) -> Self {
        let location = entry
            .comments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|comment| comment.comment_type == SUBCELLULAR_LOCATION)
            .and_then(|comment| comment.subcellular_locations.as_deref())
            .and_then(|locations| locations.first())
            .and_then(|entry| entry.location.as_ref())
            .map(|value| value.value.clone());

        Self {
            accession: entry.primary_accession,
            entry_name: entry.uniprot_kb_id.unwrap_or_default(),
            genes: entry
                .genes
                .unwrap_or_default()
                .into_iter()
                .filter_map(|gene| gene.gene_name.map(|name| name.value))
                .collect(),
            organism: entry
                .organism
                .map(|organism| organism.scientific_name)
                .unwrap_or_default(),
            location,
            length: entry.sequence.map(|sequence| sequence.length),
        }
    }
}
