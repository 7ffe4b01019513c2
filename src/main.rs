use anyhow::{bail, Context, Result};
use application::context::AppContext;
use application::query::browser::Browser;
use infra::config::{AppConfigImpl, LogConfig};
use infra::repository::in_memory::snapshot::CatalogSnapshot;
use infra::repository::in_memory::InMemoryDataStore;
use log::info;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use model::shared::to_time;
use std::path::Path;
use std::sync::Arc;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}";

const USAGE: &str = "usage: rhythm-browser <folders | indexes [ifModifiedSince] | directory <id> | song <id> | genres>";

fn init_logging(cfg: &LogConfig) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| cfg.level.clone());

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&cfg.file)?;

    // 标准输出留给查询结果，控制台日志写到 stderr
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build(
            "stderr",
            Box::new(ConsoleAppender::builder().target(Target::Stderr).build()),
        ))
        .build(
            Root::builder()
                .appender("file")
                .appender("stderr")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

async fn run(browser: &Browser, ctx: &AppContext, args: &[String]) -> Result<String> {
    let id = || {
        args.get(1)
            .map(String::as_str)
            .with_context(|| format!("missing id\n{}", USAGE))
    };

    let output = match args.first().map(String::as_str) {
        None => bail!("{}", USAGE),
        Some("folders") => serde_json::to_string_pretty(&browser.music_folders(ctx).await?)?,
        Some("indexes") => {
            let since = match args.get(1) {
                Some(ms) => ms
                    .parse::<i64>()
                    .with_context(|| format!("invalid ifModifiedSince: {}", ms))?,
                None => 0,
            };
            serde_json::to_string_pretty(&browser.indexes(ctx, to_time(since)).await?)?
        }
        Some("directory") => serde_json::to_string_pretty(&browser.directory(ctx, id()?).await?)?,
        Some("song") => serde_json::to_string_pretty(&browser.get_song(ctx, id()?).await?)?,
        Some("genres") => serde_json::to_string_pretty(&browser.get_genres(ctx).await?)?,
        Some(other) => bail!("unknown command: {}\n{}", other, USAGE),
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = AppConfigImpl::load().context("failed to load config")?;
    init_logging(&cfg.log())?;

    let catalog_path = cfg.catalog_path();
    let snapshot = CatalogSnapshot::from_path(Path::new(&catalog_path))
        .with_context(|| format!("failed to load catalog {}", catalog_path))?;
    let store = InMemoryDataStore::new(Arc::new(snapshot.into_catalog()), cfg.index_rule());
    let browser = Browser::new(Arc::new(store));

    let user = std::env::var("APP_USER").unwrap_or_else(|_| cfg.default_user());
    let ctx = AppContext::new(user);
    info!("[{}] Browsing as user {}", ctx.request_id, ctx.user_id());

    let args: Vec<String> = std::env::args().skip(1).collect();
    println!("{}", run(&browser, &ctx, &args).await?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::repository::in_memory::artist_index::ArtistIndexRule;
    use infra::repository::in_memory::catalog::Catalog;

    fn browser() -> Browser {
        let store = InMemoryDataStore::new(
            Arc::new(Catalog::new()),
            ArtistIndexRule::new("A B C", true, Vec::new()),
        );
        Browser::new(Arc::new(store))
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_without_command_prints_usage() {
        let err = run(&browser(), &AppContext::new("u1"), &[])
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("usage:"));
    }

    #[tokio::test]
    async fn test_run_commands() {
        let ctx = AppContext::new("u1");
        let output = run(&browser(), &ctx, &args(&["folders"])).await.unwrap();
        assert_eq!(output, "[]");

        let err = run(&browser(), &ctx, &args(&["directory"])).await.unwrap_err();
        assert!(err.to_string().contains("missing id"));

        let err = run(&browser(), &ctx, &args(&["scan"])).await.unwrap_err();
        assert!(err.to_string().contains("unknown command: scan"));
    }
}
