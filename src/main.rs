use fintech_catalog::domain::article::ArticleRepository;
use fintech_catalog::domain::search::SearchRepository;
use fintech_catalog::domain::strategy::{RiskLevel, StrategyRepository};
use fintech_catalog::infra::{init_tracing, setup_database, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    let pool = setup_database(&config).await?;
    let articles = ArticleRepository::new(pool.clone());
    let searches = SearchRepository::new(pool.clone());
    let strategies = StrategyRepository::new(pool);

    println!("=== 文献カタログ ===");
    println!("論文: {}件", articles.count().await);
    println!("{}", searches.statistics().await);
    for search in searches.list_all().await {
        println!("  - {}", search);
    }

    println!("\n=== 投資戦略 ===");
    for strategy in strategies.list_all().await {
        match strategy.article_id {
            Some(article_id) => println!("  - {} [論文#{}]", strategy, article_id),
            None => println!("  - {}", strategy),
        }
    }

    println!("\n=== リスク水準別のおすすめ ===");
    for level in RiskLevel::ALL {
        match strategies.list_by_risk(level.as_str()).await.first() {
            Some(best) => println!("  {}: {} ({}%)", level, best.name, best.expected_return),
            None => println!("  {}: なし", level),
        }
    }

    Ok(())
}
