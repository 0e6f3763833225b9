//! Command-line runner: fill the counters of a JSON document from a live
//! comment server and print the result.

use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::api::HttpApi;
use crate::context::Context;
use crate::dom::MemoryDocument;
use crate::stat::PvCountWidget;
use crate::Config;

pub async fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let dom_path = config
        .dom_path
        .clone()
        .context("No DOM file given, pass --dom <file.json>")?;
    let mut dom = MemoryDocument::load(&dom_path)?;

    let api = Arc::new(HttpApi::from_config(&config)?);
    let mut ctx = Context::new(config.clone(), api);
    let mut widget = PvCountWidget::register(&ctx);

    ctx.update_conf(config);
    let runs = widget.run_pending(&mut dom).await?;
    log::debug!("count widget ran {} time(s)", runs);

    ctx.destroy();

    println!("{}", dom.to_json_pretty()?);
    Ok(())
}
