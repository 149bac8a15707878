//! Integration tests for the reassembly pipeline.

use docweave::{
    assemble, AssembleOptions, AssignmentPolicy, Block, DecodedImage, Document, LayoutSource,
    NoticeReason, PageLayout, PaintCommand, Rect, Result, TableGrid,
};

/// In-memory layout source, standing in for the extraction collaborator.
struct MockSource {
    pages: Vec<PageLayout>,
}

impl LayoutSource for MockSource {
    fn page_count(&self) -> Result<u32> {
        Ok(self.pages.len() as u32)
    }

    fn load_page(&self, number: u32) -> Result<PageLayout> {
        Ok(self.pages[(number - 1) as usize].clone())
    }
}

fn blank_page(number: u32) -> PageLayout {
    PageLayout {
        number,
        width: 612.0,
        height: 792.0,
        text: None,
        tables: vec![],
        images: vec![],
        drawings: vec![],
    }
}

fn decoded(id: u32, tag: u8) -> DecodedImage {
    DecodedImage {
        id,
        data: vec![tag],
        format: "png".to_string(),
    }
}

fn placed(id: u32, rect: Rect) -> PaintCommand {
    PaintCommand {
        rect,
        fill_image: Some(id),
    }
}

fn service_table() -> TableGrid {
    TableGrid::from_strings(
        vec![
            vec!["Service", "Status"],
            vec!["S3", "up"],
            vec!["EC2", "degraded"],
        ],
        Rect::new(20.0, 20.0, 300.0, 110.0),
    )
}

#[test]
fn two_rows_two_images_in_reading_order() {
    // imgA sits above imgB; rows 1 and 2 must embed them in that order and
    // the standalone set must be empty.
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.images = vec![decoded(2, 0xBB), decoded(1, 0xAA)];
    page.drawings = vec![
        placed(1, Rect::new(24.0, 52.0, 48.0, 76.0)),
        placed(2, Rect::new(24.0, 82.0, 48.0, 106.0)),
    ];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let page = &doc.pages[0];
    let table = page.tables().next().unwrap();

    assert_eq!(table.rows[1].cells[0].icon.as_ref().unwrap().data, vec![0xAA]);
    assert_eq!(table.rows[2].cells[0].icon.as_ref().unwrap().data, vec![0xBB]);
    assert_eq!(page.standalone_images().count(), 0);
}

#[test]
fn no_tables_three_standalone_images() {
    let mut page = blank_page(1);
    page.images = vec![decoded(1, 1), decoded(2, 2), decoded(3, 3)];
    page.drawings = vec![
        placed(1, Rect::new(10.0, 10.0, 50.0, 50.0)),
        placed(2, Rect::new(10.0, 100.0, 50.0, 140.0)),
        placed(3, Rect::new(10.0, 200.0, 50.0, 240.0)),
    ];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let page = &doc.pages[0];

    assert_eq!(page.tables().count(), 0);
    assert_eq!(page.standalone_images().count(), 3);
}

#[test]
fn conservation_no_image_in_two_destinations() {
    // A free image far from the table plus two row icons: every payload
    // must land in exactly one destination.
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.images = vec![decoded(1, 1), decoded(2, 2), decoded(3, 3)];
    page.drawings = vec![
        placed(1, Rect::new(24.0, 52.0, 48.0, 76.0)),
        placed(2, Rect::new(24.0, 82.0, 48.0, 106.0)),
        placed(3, Rect::new(400.0, 500.0, 500.0, 600.0)),
    ];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let page = &doc.pages[0];

    let mut consumed: Vec<u8> = page
        .tables()
        .flat_map(|t| t.rows.iter())
        .flat_map(|r| r.cells.iter())
        .filter_map(|c| c.icon.as_ref().map(|img| img.data[0]))
        .collect();
    let standalone: Vec<u8> = page.standalone_images().map(|img| img.data[0]).collect();

    assert_eq!(standalone, vec![3]);
    consumed.sort();
    assert_eq!(consumed, vec![1, 2]);
}

#[test]
fn fallback_bbox_image_still_assigned_by_row_order() {
    // No drawings at all: both images get whole-page fallback bounds but
    // ordered-greedy assignment still pairs them with the data rows.
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.images = vec![decoded(1, 0xAA), decoded(2, 0xBB)];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();

    assert_eq!(doc.notices.len(), 2);
    assert!(doc
        .notices
        .iter()
        .all(|n| n.reason == NoticeReason::UnresolvedBounds));

    let table = doc.pages[0].tables().next().unwrap();
    // Equal vertical centers: extraction order breaks the tie.
    assert_eq!(table.rows[1].cells[0].icon.as_ref().unwrap().data, vec![0xAA]);
    assert_eq!(table.rows[2].cells[0].icon.as_ref().unwrap().data, vec![0xBB]);
    assert_eq!(doc.pages[0].standalone_images().count(), 0);
}

#[test]
fn leftover_pool_feeds_later_table_on_same_page() {
    let mut page = blank_page(1);
    let second_table = TableGrid::from_strings(
        vec![vec!["Region", "Zone"], vec!["us-east-1", "a"]],
        Rect::new(20.0, 200.0, 300.0, 260.0),
    );
    page.tables.push(service_table());
    page.tables.push(second_table);
    page.images = vec![decoded(1, 1), decoded(2, 2), decoded(3, 3)];
    page.drawings = vec![
        placed(1, Rect::new(24.0, 52.0, 48.0, 76.0)),
        placed(2, Rect::new(24.0, 82.0, 48.0, 106.0)),
        placed(3, Rect::new(24.0, 222.0, 48.0, 246.0)),
    ];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let tables: Vec<_> = doc.pages[0].tables().collect();

    assert_eq!(tables[1].rows[1].cells[0].icon.as_ref().unwrap().data, vec![3]);
    assert_eq!(doc.pages[0].standalone_images().count(), 0);
}

#[test]
fn greedy_exhaustion_last_rows_have_no_icon() {
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.images = vec![decoded(1, 1)];
    page.drawings = vec![placed(1, Rect::new(24.0, 52.0, 48.0, 76.0))];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let table = doc.pages[0].tables().next().unwrap();

    assert!(table.rows[1].cells[0].icon.is_some());
    assert!(table.rows[2].cells[0].icon.is_none());
}

#[test]
fn nearest_neighbor_skips_misplaced_images() {
    let mut page = blank_page(1);
    page.tables.push(service_table());
    // Image painted nowhere near row 1's primary cell; only row 2 matches.
    // Table rows split 20..110 into thirds: data row 2 spans y 80..110,
    // primary cell x 20..160, center (90, 95).
    page.images = vec![decoded(1, 9)];
    page.drawings = vec![placed(1, Rect::new(70.0, 85.0, 94.0, 105.0))];

    let options = AssembleOptions::new().with_policy(AssignmentPolicy::NearestNeighbor);
    let doc = assemble(&MockSource { pages: vec![page] }, &options).unwrap();
    let table = doc.pages[0].tables().next().unwrap();

    assert!(table.rows[1].cells[0].icon.is_none());
    assert_eq!(table.rows[2].cells[0].icon.as_ref().unwrap().data, vec![9]);
}

#[test]
fn pages_keep_their_reported_numbers_and_order() {
    let mut first = blank_page(1);
    first.text = Some("first".to_string());
    let mut second = blank_page(2);
    second.text = Some("second".to_string());

    let doc = assemble(
        &MockSource {
            pages: vec![first, second],
        },
        &AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.pages[0].number, 1);
    assert_eq!(doc.pages[1].number, 2);
    assert_eq!(doc.pages[1].text_blocks().next(), Some("second"));
}

#[test]
fn assembly_is_deterministic() {
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.text = Some("alpha\n\nbeta".to_string());
    page.images = vec![decoded(1, 1), decoded(2, 2), decoded(3, 3)];
    page.drawings = vec![
        placed(1, Rect::new(24.0, 52.0, 48.0, 76.0)),
        placed(2, Rect::new(24.0, 82.0, 48.0, 106.0)),
        placed(3, Rect::new(400.0, 500.0, 500.0, 600.0)),
    ];
    let source = MockSource { pages: vec![page] };
    let options = AssembleOptions::default();

    let snapshot = |doc: &Document| serde_json::to_string(doc).unwrap();
    let first = snapshot(&assemble(&source, &options).unwrap());
    let second = snapshot(&assemble(&source, &options).unwrap());
    assert_eq!(first, second);
}

#[test]
fn empty_header_table_does_not_fail() {
    let mut page = blank_page(1);
    page.tables.push(TableGrid::new(
        vec![vec![None, None]],
        Rect::new(0.0, 0.0, 100.0, 30.0),
    ));

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let table = doc.pages[0].tables().next().unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].cells.iter().all(|c| c.text.is_none()));
}

#[test]
fn blocks_follow_fixed_emission_order() {
    let mut page = blank_page(1);
    page.tables.push(service_table());
    page.text = Some("trailing text".to_string());
    page.images = vec![decoded(1, 1), decoded(2, 2), decoded(3, 3)];
    page.drawings = vec![
        placed(1, Rect::new(24.0, 52.0, 48.0, 76.0)),
        placed(2, Rect::new(24.0, 82.0, 48.0, 106.0)),
        placed(3, Rect::new(400.0, 500.0, 500.0, 600.0)),
    ];

    let doc = assemble(&MockSource { pages: vec![page] }, &AssembleOptions::default()).unwrap();
    let kinds: Vec<&str> = doc.pages[0]
        .blocks
        .iter()
        .map(|b| match b {
            Block::Table(_) => "table",
            Block::Image(_) => "image",
            Block::Text(_) => "text",
        })
        .collect();
    assert_eq!(kinds, vec!["table", "image", "text"]);
}
