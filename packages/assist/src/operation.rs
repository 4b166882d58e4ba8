// ABOUTME: The per-feature unit of work run by a RequestController
// ABOUTME: Expression generation, expression refinement and social situation analysis

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use resonance_ai::{parse_analysis, parse_social_analysis, GenerationConfig, GenerativeModel};
use resonance_core::{
    ExpressionAnalysis, ExpressionRequest, ExpressionResult, RefinementRequest, SocialAnalysis,
    SocialSituation, ValidationError,
};
use resonance_prompts::{build_expression_prompt, build_refinement_prompt, build_social_prompt};
use tracing::info;

use crate::error::AssistError;

/// One feature's request pipeline: prompt, gateway call, response shaping
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    type Request: Clone + Debug + Send + Sync + 'static;
    type Output: Clone + Debug + Send + Sync + 'static;

    /// Feature name used in logs
    const NAME: &'static str;

    fn validate(&self, request: &Self::Request) -> Result<(), ValidationError>;

    /// Request used by "try again": the base request plus extra user context
    fn with_additional_context(&self, base: &Self::Request, note: Option<&str>) -> Self::Request;

    async fn execute(&self, request: &Self::Request) -> Result<Self::Output, AssistError>;
}

pub struct ExpressionGenerator {
    model: Arc<dyn GenerativeModel>,
    config: GenerationConfig,
}

impl ExpressionGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self::with_config(model, GenerationConfig::expression())
    }

    pub fn with_config(model: Arc<dyn GenerativeModel>, config: GenerationConfig) -> Self {
        Self { model, config }
    }
}

#[async_trait]
impl Operation for ExpressionGenerator {
    type Request = ExpressionRequest;
    type Output = ExpressionResult;

    const NAME: &'static str = "expression";

    fn validate(&self, request: &ExpressionRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn with_additional_context(
        &self,
        base: &ExpressionRequest,
        note: Option<&str>,
    ) -> ExpressionRequest {
        base.with_additional_note(note)
    }

    async fn execute(&self, request: &ExpressionRequest) -> Result<ExpressionResult, AssistError> {
        let prompt = build_expression_prompt(request);
        let text = self.model.generate(&prompt, &self.config).await?;
        info!("Generated expression ({} chars)", text.chars().count());
        Ok(ExpressionResult::new(text))
    }
}

pub struct ExpressionRefiner {
    model: Arc<dyn GenerativeModel>,
    config: GenerationConfig,
}

impl ExpressionRefiner {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self::with_config(model, GenerationConfig::analysis())
    }

    pub fn with_config(model: Arc<dyn GenerativeModel>, config: GenerationConfig) -> Self {
        Self { model, config }
    }
}

#[async_trait]
impl Operation for ExpressionRefiner {
    type Request = RefinementRequest;
    type Output = ExpressionAnalysis;

    const NAME: &'static str = "refinement";

    fn validate(&self, request: &RefinementRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn with_additional_context(
        &self,
        base: &RefinementRequest,
        note: Option<&str>,
    ) -> RefinementRequest {
        base.with_additional_context(note)
    }

    async fn execute(&self, request: &RefinementRequest) -> Result<ExpressionAnalysis, AssistError> {
        let prompt = build_refinement_prompt(request);
        let raw = self.model.generate(&prompt, &self.config).await?;
        Ok(parse_analysis(&raw)?)
    }
}

pub struct SocialAnalyzer {
    model: Arc<dyn GenerativeModel>,
    config: GenerationConfig,
}

impl SocialAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            config: GenerationConfig::analysis(),
        }
    }
}

#[async_trait]
impl Operation for SocialAnalyzer {
    type Request = SocialSituation;
    type Output = SocialAnalysis;

    const NAME: &'static str = "social";

    fn validate(&self, request: &SocialSituation) -> Result<(), ValidationError> {
        request.validate()
    }

    fn with_additional_context(&self, base: &SocialSituation, note: Option<&str>) -> SocialSituation {
        base.with_additional_context(note)
    }

    async fn execute(&self, request: &SocialSituation) -> Result<SocialAnalysis, AssistError> {
        let prompt = build_social_prompt(request);
        let raw = self.model.generate(&prompt, &self.config).await?;
        Ok(parse_social_analysis(&raw)?)
    }
}
