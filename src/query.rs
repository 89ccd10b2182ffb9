//! Query construction for the search endpoint.
//!
//! [`QueryState`] owns the three inputs of a request URL (base endpoint,
//! search text, optional sort) and rebuilds the URL from them on every
//! request. Rebuilding from explicit fields keeps the invariants trivial:
//! there is always exactly one query clause and at most one sort clause.

use serde::{Deserialize, Serialize};

/// Default REST endpoint for the protein dataset.
pub const DEFAULT_BASE_URL: &str = "https://rest.uniprot.org/uniprotkb";

/// The fixed set of sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Accession,
    EntryName,
    Gene,
    OrganismName,
    Length,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Accession,
        SortColumn::EntryName,
        SortColumn::Gene,
        SortColumn::OrganismName,
        SortColumn::Length,
    ];

    /// Field token understood by the remote sort grammar.
    pub fn api_field(self) -> &'static str {
        match self {
            SortColumn::Accession => "accession",
            SortColumn::EntryName => "id",
            SortColumn::Gene => "gene",
            SortColumn::OrganismName => "organism_name",
            SortColumn::Length => "length",
        }
    }

    /// Parses the remote field token back into a column.
    pub fn from_api_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.api_field() == field)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn api_token(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn from_api_token(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

/// Complete sorting specification. At most one column is ever active;
/// "no sort" is represented as `Option::<SortSpec>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub dir: SortDir,
}

/// Advances the sort state for a click on `clicked`.
///
/// Per column the cycle is none -> ascending -> descending -> none; a click
/// on a different column always starts at ascending and implicitly clears
/// the previously active column.
pub fn next_sort(current: Option<SortSpec>, clicked: SortColumn) -> Option<SortSpec> {
    match current {
        Some(SortSpec { column, dir: SortDir::Asc }) if column == clicked => Some(SortSpec {
            column: clicked,
            dir: SortDir::Desc,
        }),
        Some(SortSpec { column, dir: SortDir::Desc }) if column == clicked => None,
        _ => Some(SortSpec {
            column: clicked,
            dir: SortDir::Asc,
        }),
    }
}

/// The inputs of a request URL, mutated only through the SEARCH and SORT
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    base: String,
    search: String,
    sort: Option<SortSpec>,
}

impl QueryState {
    /// Creates a query state for the given base endpoint with an empty
    /// (match-all) search and no sort.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            search: String::new(),
            sort: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// SEARCH transition: installs new search text and unconditionally
    /// clears any active sort. Starting a new search resets sort.
    pub fn apply_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.sort = None;
    }

    /// SORT transition: `None` strips the sort clause, `Some` installs
    /// exactly one sort clause, replacing any prior one. The search text
    /// is preserved.
    pub fn apply_sort(&mut self, column: SortColumn, dir: Option<SortDir>) {
        self.sort = dir.map(|dir| SortSpec { column, dir });
    }

    /// Builds the request URL for the current state:
    /// `<base>/search?&query=(<encoded search>)[&sort=<field>%20<asc|desc>]`.
    ///
    /// Building never fails; an empty search produces the match-all query
    /// `query=()`.
    pub fn request_url(&self) -> String {
        let mut url = format!("{}/search?&query=({})", self.base, encode_component(&self.search));
        if let Some(SortSpec { column, dir }) = self.sort {
            url.push_str("&sort=");
            url.push_str(column.api_field());
            url.push_str("%20");
            url.push_str(dir.api_token());
        }
        url
    }
}

/// Percent-encodes a query component. Unreserved characters (RFC 3986) pass
/// through; everything else, including spaces, becomes `%XX`.
pub fn encode_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push(char::from_digit((byte >> 4) as u32, 16).unwrap().to_ascii_uppercase());
                encoded.push(char::from_digit((byte & 0x0f) as u32, 16).unwrap().to_ascii_uppercase());
            }
        }
    }
    encoded
}

/// Decodes a percent-encoded query component. Malformed escapes are kept
/// verbatim rather than rejected.
pub fn decode_component(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3).and_then(|pair| {
                let pair = std::str::from_utf8(pair).ok()?;
                u8::from_str_radix(pair, 16).ok()
            });
            if let Some(byte) = hex {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}
