//! 投資戦略のライフサイクル統合テスト
//!
//! メモリ上のデータベースを各サービスに注入し、
//! 公開APIだけで作成から削除までを確認する。

use fintech_catalog::domain::article::ArticleRepository;
use fintech_catalog::domain::search::SearchRepository;
use fintech_catalog::domain::strategy::{StrategyForm, StrategyRepository};
use fintech_catalog::infra::setup_in_memory_database;

fn momentum_form() -> StrategyForm {
    StrategyForm {
        name: "Momentum AI".to_string(),
        description: "Estrategia de impulso con modelos de IA".to_string(),
        strategy_type: "Agresiva".to_string(),
        risk_level: "Alto".to_string(),
        technologies: "Python".to_string(),
        expected_return: "18.5".to_string(),
        article_id: String::new(),
    }
}

#[tokio::test]
async fn test_strategy_lifecycle() -> Result<(), anyhow::Error> {
    let pool = setup_in_memory_database().await?;
    let strategies = StrategyRepository::new(pool);

    let mut conservative = StrategyForm {
        name: "Bonos Verdes".to_string(),
        risk_level: "Bajo".to_string(),
        expected_return: "4.5".to_string(),
        ..momentum_form()
    }
    .validate()?;
    assert!(strategies.create(&mut conservative).await);

    let mut momentum = momentum_form().validate()?;
    assert!(strategies.create(&mut momentum).await);
    assert_eq!(momentum.article_id, None);

    // 最も新しく作成した戦略が先頭
    let all = strategies.list_all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, momentum.id);

    // 名前で検索できる
    let found = strategies.search("Momentum").await;
    assert!(found.iter().any(|s| s.id == momentum.id));

    // リスク水準が異なれば含まれない
    let low = strategies.list_by_risk("Bajo").await;
    assert!(low.iter().all(|s| s.id != momentum.id));
    assert!(low.iter().any(|s| s.id == conservative.id));

    // 編集フォーム経由で更新
    let mut form = StrategyForm::from_strategy(&momentum);
    form.expected_return = "21".to_string();
    form.article_id = "7".to_string();
    form.validate_into(&mut momentum)?;
    assert!(strategies.update(&momentum).await);

    let stored = strategies.get_by_id(momentum.id).await.expect("更新後の戦略が見つからない");
    assert_eq!(stored.expected_return, 21.0);
    assert_eq!(stored.article_id, Some(7));
    assert_eq!(stored.created_at, momentum.created_at);

    // 削除
    assert!(strategies.delete(momentum.id).await);
    assert!(strategies.get_by_id(momentum.id).await.is_none());
    assert!(!strategies.delete(momentum.id).await);
    assert_eq!(strategies.count().await, 1);

    println!("✅ 戦略ライフサイクル統合テスト成功");
    Ok(())
}

#[tokio::test]
async fn test_empty_catalog_defaults() -> Result<(), anyhow::Error> {
    let pool = setup_in_memory_database().await?;
    let articles = ArticleRepository::new(pool.clone());
    let searches = SearchRepository::new(pool);

    assert!(articles.list_all().await.is_empty());
    assert_eq!(articles.count().await, 0);
    // 論文の"%"検索は例外にならず空の結果になる
    assert!(articles.search("%").await.is_empty());
    assert_eq!(searches.statistics().await.as_pair(), (0, 0));
    Ok(())
}

#[tokio::test]
async fn test_keyword_search_is_case_sensitive() -> Result<(), anyhow::Error> {
    let pool = setup_in_memory_database().await?;
    let articles = ArticleRepository::new(pool.clone());
    let strategies = StrategyRepository::new(pool.clone());

    sqlx::query(
        "INSERT INTO busquedas (id, nombre_estudiante, base_datos, cadena_busqueda, cantidad_documentos) \
         VALUES (1, 'Ana Torres', 'Scopus', 'momentum investing', 10)",
    )
    .execute(&pool)
    .await?;
    sqlx::query(
        "INSERT INTO articulos (id, busqueda_id, titulo, autores, anio_publicacion, palabras_clave) \
         VALUES (1, 1, 'Momentum Strategies with Neural Networks', 'Smith, J.', 2023, 'trend following')",
    )
    .execute(&pool)
    .await?;

    let mut momentum = momentum_form().validate()?;
    assert!(strategies.create(&mut momentum).await);

    // 表記どおりなら一致する
    let found: Vec<i64> = articles.search("Momentum").await.iter().map(|a| a.id).collect();
    assert_eq!(found, vec![1]);
    let found: Vec<i64> = strategies.search("Momentum").await.iter().map(|s| s.id).collect();
    assert_eq!(found, vec![momentum.id]);

    // 大文字小文字が異なれば一致しない
    assert!(articles.try_search("momentum").await?.is_empty());
    assert!(strategies.try_search("momentum").await?.is_empty());

    println!("✅ 大文字小文字を区別する部分一致検索の確認成功");
    Ok(())
}
