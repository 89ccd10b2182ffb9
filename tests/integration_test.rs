use anyhow::Result;
use protview::{
    next_page_link, next_sort, Page, PageSource, ProteinRow, QueryState, SampleSource,
    SearchResponse, SortColumn, SortDir, SortSpec,
};
use protview::sample::SAMPLE_BASE_URL;

fn fetch_all(source: &SampleSource, first_url: &str) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    let mut url = first_url.to_string();
    loop {
        let page = source.fetch_page(&url)?;
        let next = page.next_link.clone();
        pages.push(page);
        if next.is_empty() {
            return Ok(pages);
        }
        url = next;
    }
}

#[test]
fn test_search_and_paginate_end_to_end() -> Result<()> {
    let source = SampleSource::new(1_000, 64, 42);

    let mut query = QueryState::new(SAMPLE_BASE_URL);
    query.apply_search("HUMAN");

    let pages = fetch_all(&source, &query.request_url())?;
    assert!(pages.len() > 1, "the filtered set should span several pages");

    // The buffer a client accumulates is the in-order concatenation of all
    // pages; no row is lost or duplicated along the chain.
    let rows: Vec<ProteinRow> = pages.into_iter().flat_map(|page| page.rows).collect();
    assert!(!rows.is_empty());
    let mut accessions: Vec<_> = rows.iter().map(|row| row.accession.clone()).collect();
    let total = accessions.len();
    accessions.sort();
    accessions.dedup();
    assert_eq!(accessions.len(), total);

    for row in &rows {
        assert!(
            row.entry_name.contains("HUMAN") || row.organism == "Homo sapiens",
            "row {} does not match the search",
            row.accession
        );
    }
    Ok(())
}

#[test]
fn test_sort_cycle_drives_query_urls() -> Result<()> {
    let source = SampleSource::new(300, 100, 42);
    let mut query = QueryState::new(SAMPLE_BASE_URL);
    let mut sort = None;

    // First click: ascending by length.
    sort = next_sort(sort, SortColumn::Length);
    query.apply_sort(SortColumn::Length, sort.map(|s: SortSpec| s.dir));
    let ascending = source.fetch_page(&query.request_url())?;
    let lengths: Vec<_> = ascending.rows.iter().map(|row| row.length).collect();
    let mut expected = lengths.clone();
    expected.sort();
    assert_eq!(lengths, expected);

    // Second click: descending.
    sort = next_sort(sort, SortColumn::Length);
    query.apply_sort(SortColumn::Length, sort.map(|s| s.dir));
    let descending = source.fetch_page(&query.request_url())?;
    let lengths: Vec<_> = descending.rows.iter().map(|row| row.length).collect();
    let mut expected = lengths.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(lengths, expected);

    // Third click clears the sort clause entirely.
    sort = next_sort(sort, SortColumn::Length);
    assert_eq!(sort, None);
    query.apply_sort(SortColumn::Length, None);
    assert!(!query.request_url().contains("&sort="));
    Ok(())
}

#[test]
fn test_search_resets_sort_midway_through_pagination() -> Result<()> {
    let source = SampleSource::new(500, 50, 42);

    let mut query = QueryState::new(SAMPLE_BASE_URL);
    query.apply_sort(SortColumn::Accession, Some(SortDir::Desc));
    let first = source.fetch_page(&query.request_url())?;
    assert!(first.next_link.contains("&sort=accession%20desc"));

    // A new search abandons the open continuation chain and the sort.
    query.apply_search("YEAST");
    let url = query.request_url();
    assert!(url.contains("query=(YEAST)"));
    assert!(!url.contains("&sort="));

    let restarted = source.fetch_page(&url)?;
    for row in &restarted.rows {
        assert!(row.entry_name.contains("YEAST") || row.organism == "Saccharomyces cerevisiae");
    }
    Ok(())
}

#[test]
fn test_cursor_extraction_matches_link_relation_syntax() {
    assert_eq!(
        next_page_link("<https://api.example.org/next?page=2>; rel=\"next\""),
        "https://api.example.org/next?page=2"
    );
    assert_eq!(next_page_link(""), "");
    assert_eq!(next_page_link("rel=\"next\""), "");
}

#[test]
fn test_response_body_projects_into_rows() -> Result<()> {
    let body = r#"{
        "results": [
            {
                "primaryAccession": "P01308",
                "uniProtkbId": "INS_HUMAN",
                "organism": { "scientificName": "Homo sapiens" },
                "genes": [ { "geneName": { "value": "INS" } } ],
                "sequence": { "length": 110 },
                "comments": [
                    {
                        "commentType": "SUBCELLULAR LOCATION",
                        "subcellularLocations": [
                            { "location": { "value": "Secreted" } }
                        ]
                    }
                ]
            },
            { "primaryAccession": "P99998" }
        ]
    }"#;

    let response: SearchResponse = serde_json::from_str(body)?;
    let rows: Vec<ProteinRow> = response
        .results
        .into_iter()
        .map(ProteinRow::from_entry)
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].accession, "P01308");
    assert_eq!(rows[0].entry_name, "INS_HUMAN");
    assert_eq!(rows[0].genes, vec!["INS".to_string()]);
    assert_eq!(rows[0].location.as_deref(), Some("Secreted"));
    assert_eq!(rows[0].length, Some(110));

    // Order is preserved and sparse entries survive projection.
    assert_eq!(rows[1].accession, "P99998");
    assert_eq!(rows[1].length, None);
    Ok(())
}

#[test]
fn test_match_all_query_pages_the_whole_dataset() -> Result<()> {
    let source = SampleSource::new(230, 100, 7);
    let query = QueryState::new(SAMPLE_BASE_URL);

    let pages = fetch_all(&source, &query.request_url())?;
    let sizes: Vec<_> = pages.iter().map(|page| page.rows.len()).collect();
    assert_eq!(sizes, [100, 100, 30]);
    Ok(())
}
