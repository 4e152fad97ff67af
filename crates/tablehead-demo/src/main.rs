#![forbid(unsafe_code)]

//! Scripted walkthrough of the headless table pipeline.
//!
//! Builds a table over generated sample rows, then replays the
//! interactions the library models (page changes, a selection toggle, and
//! a live resize drag), printing the derived frame after each step.

mod cli;
mod paint;

use tablehead::{ColumnDef, DataTable, ResizeOutcome, SELECT_COLUMN_ID};

struct Release {
    title: String,
    artist: String,
    year: u16,
}

fn sample_rows(n: usize) -> Vec<Release> {
    const TITLES: [&str; 7] = [
        "Horses",
        "Marquee Moon",
        "Unknown Pleasures",
        "Remain in Light",
        "Daydream Nation",
        "Loveless",
        "Spiderland",
    ];
    const ARTISTS: [&str; 7] = [
        "Patti Smith",
        "Television",
        "Joy Division",
        "Talking Heads",
        "Sonic Youth",
        "My Bloody Valentine",
        "Slint",
    ];
    (0..n)
        .map(|i| Release {
            title: format!("{} ({})", TITLES[i % TITLES.len()], i / TITLES.len() + 1),
            artist: ARTISTS[i % ARTISTS.len()].to_string(),
            year: 1975 + (i % 20) as u16,
        })
        .collect()
}

fn build_table(page_size: usize) -> DataTable<Release> {
    let columns = vec![
        ColumnDef::new("title", |r: &Release| r.title.clone())
            .header("Title")
            .size(160.0)
            .min_size(80.0)
            .max_size(320.0),
        ColumnDef::new("artist", |r: &Release| r.artist.clone()).header("Artist"),
        ColumnDef::new("year", |r: &Release| r.year.to_string())
            .header("Year")
            .size(60.0)
            .min_size(48.0)
            .max_size(96.0),
    ];
    DataTable::new(columns, |checked: bool| {
        if checked { "[x]" } else { "[ ]" }.to_string()
    })
    .page_size(page_size)
}

fn heading(step: &str) {
    println!("\n== {step} ==");
}

fn main() {
    let opts = cli::Opts::parse();

    if let Some(filter) = &opts.log_filter {
        tracing_subscriber::fmt()
            .with_env_filter(filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::info!(rows = opts.rows, page_size = opts.page_size, "demo start");

    let data = sample_rows(opts.rows);
    let mut table = build_table(opts.page_size);

    heading("first page");
    let frame = table.frame(&data);
    print!("{}", paint::render_frame(&frame));

    heading("toggle the second visible row");
    if let Some(slot) = frame.rows.get(1) {
        let id = slot.row.id.clone();
        table.toggle_row(&id);
        println!("selected: {:?}", table.selected_row().map(|r| r.as_str()));
    }
    print!("{}", paint::render_frame(&table.frame(&data)));

    heading("next page (selection persists on its own row)");
    table.set_page_index(1);
    print!("{}", paint::render_frame(&table.frame(&data)));

    heading("drag-resize the artist column (+550px, clamped to its 500px max)");
    table.set_page_index(0);
    table.begin_resize("artist", 400.0);
    for x in [500.0, 700.0, 950.0] {
        table.update_resize(x);
    }
    table.end_resize();
    let late = table.update_resize(900.0);
    println!(
        "late update after end ignored: {}",
        late == ResizeOutcome::Ignored
    );
    let frame = table.frame(&data);
    print!("{}", paint::render_frame(&frame));
    println!("sizing vars:");
    print!("{}", paint::render_sizing_vars(&frame));

    heading("widen the select column (the pinned region reflows)");
    table.begin_resize(SELECT_COLUMN_ID, 0.0);
    table.update_resize(40.0);
    table.end_resize();
    let frame = table.frame(&data);
    print!("{}", paint::render_frame(&frame));
    println!("pinned columns:");
    print!("{}", paint::render_pinned(&frame));

    heading("empty data set");
    let empty: Vec<Release> = Vec::new();
    print!("{}", paint::render_frame(&table.frame(&empty)));
}
