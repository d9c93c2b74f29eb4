use super::model::{ParseRiskLevelError, RiskLevel, Strategy};
use thiserror::Error;

/// 入力フォームの検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 必須項目が空
    #[error("必須項目が入力されていません: {field}")]
    MissingField { field: &'static str },

    /// 期待リターンが数値でない
    #[error("期待リターンは数値で入力してください: {value}")]
    InvalidReturn { value: String },

    /// 既知のリスク水準でない
    #[error("リスク水準はBajo・Medio・Altoのいずれかです: {value}")]
    InvalidRiskLevel { value: String },

    /// 関連論文IDが正の整数でない
    #[error("関連論文IDは正の整数で入力してください: {value}")]
    InvalidArticleId { value: String },
}

/// ユーザーが入力したままの戦略フォーム
///
/// 表示層は文字列をそのまま詰め、`validate`で`Strategy`に変換してから
/// 作成・更新を呼び出す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyForm {
    pub name: String,
    pub description: String,
    pub strategy_type: String,
    pub risk_level: String,
    pub technologies: String,
    pub expected_return: String,
    /// 空なら関連論文なし
    pub article_id: String,
}

impl StrategyForm {
    /// 編集用に既存の戦略からフォームを作成する
    pub fn from_strategy(strategy: &Strategy) -> Self {
        Self {
            name: strategy.name.clone(),
            description: strategy.description.clone(),
            strategy_type: strategy.strategy_type.clone(),
            risk_level: strategy.risk_level.clone(),
            technologies: strategy.technologies.clone(),
            expected_return: strategy.expected_return.to_string(),
            article_id: strategy
                .article_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    /// 入力を検証して未保存の戦略を作成する
    pub fn validate(&self) -> Result<Strategy, ValidationError> {
        let mut strategy = Strategy::default();
        self.validate_into(&mut strategy)?;
        Ok(strategy)
    }

    /// 入力を検証して既存の戦略に反映する
    /// IDとタイムスタンプは変更しない。検証に失敗した場合は何も書き換えない
    pub fn validate_into(&self, target: &mut Strategy) -> Result<(), ValidationError> {
        let name = required("nombre", &self.name)?;
        let description = required("descripcion", &self.description)?;
        let strategy_type = required("tipo_estrategia", &self.strategy_type)?;
        let technologies = required("tecnologias_utilizadas", &self.technologies)?;
        let raw_return = required("retorno_esperado", &self.expected_return)?;

        let expected_return = raw_return
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::InvalidReturn {
                value: raw_return.to_string(),
            })?;

        let risk_level = self
            .risk_level
            .parse::<RiskLevel>()
            .map_err(|e: ParseRiskLevelError| ValidationError::InvalidRiskLevel { value: e.value })?;

        let article_id = parse_article_id(&self.article_id)?;

        target.name = name.to_string();
        target.description = description.to_string();
        target.strategy_type = strategy_type.to_string();
        target.risk_level = risk_level.as_str().to_string();
        target.technologies = technologies.to_string();
        target.expected_return = expected_return;
        target.article_id = article_id;
        Ok(())
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

fn parse_article_id(raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(ValidationError::InvalidArticleId {
            value: raw.to_string(),
        }),
    }
}
