use anyhow::Result;
use tweetx::{init_tracing_once, PipelineOptions, TweetPipeline};

const INPUT: &str = "./data/test_data_100.json";
const OUT_DIR: &str = "./out";

fn main() -> Result<()> {
    init_tracing_once();

    let opts = PipelineOptions::default()
        .with_input(INPUT)
        .with_out_dir(OUT_DIR);

    let out = TweetPipeline::with_options(opts)
        .save(true)
        .clean(true)
        .save_cleaned(true)
        .progress(true)
        .run()?;

    for row in out.table.rows().iter().take(5) {
        println!("{:.3}\t{}", row.subjectivity, row.screen_name);
    }
    if let Some(p) = &out.processed_path {
        println!("Saved {}", p.display());
    }
    if let Some(p) = &out.cleaned_path {
        println!("Saved {}", p.display());
    }
    Ok(())
}
