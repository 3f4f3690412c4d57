use crate::profiles::{content_crew, media_crew, Roster};
use crate::types::TaskOutput;
use chrono::{DateTime, Utc};
use marketcrew_agent::{ImageGenerator, ImageQuality, ImageSize, TextGenerator};
use marketcrew_channels::{Credentials, PostOutcome, PublisherSet};
use marketcrew_core::{PipelineError, PipelineResult, Stage, TraceSink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// What the caller wants advertised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub product_website: String,
    #[serde(default)]
    pub product_details: String,
}

impl CampaignRequest {
    pub fn new(product_website: impl Into<String>, product_details: impl Into<String>) -> Self {
        Self {
            product_website: product_website.into(),
            product_details: product_details.into(),
        }
    }
}

/// Everything one pipeline run produced.
///
/// `generated_image_url` and `image_error` are mutually exclusive. When the
/// image stage failed, `posts` is empty and the copy is still valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub generated_copy: String,
    pub generated_image_prompt: String,
    pub generated_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_error: Option<String>,
    pub content_outputs: Vec<TaskOutput>,
    pub media_outputs: Vec<TaskOutput>,
    pub posts: Vec<PostOutcome>,
}

impl PipelineRun {
    /// Platforms that accepted the post.
    pub fn posted_count(&self) -> usize {
        self.posts.iter().filter(|p| p.success).count()
    }
}

/// The fixed content → media → image → posting pipeline.
///
/// Stages run strictly in sequence. A crew failure aborts the run; an image
/// failure skips posting but still returns the copy; posting failures are
/// recorded per platform and never abort anything.
pub struct Pipeline {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    publishers: PublisherSet,
    roster: Roster,
}

impl Pipeline {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        publishers: PublisherSet,
    ) -> Self {
        Self {
            text,
            image,
            publishers,
            roster: Roster::default(),
        }
    }

    /// Replace the default marketing roster.
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the whole pipeline once.
    ///
    /// Crew trace text goes to `trace`; nothing is written there by the
    /// image or posting stages.
    pub async fn run(
        &self,
        request: &CampaignRequest,
        credentials: &Credentials,
        trace: &mut dyn TraceSink,
    ) -> PipelineResult<PipelineRun> {
        if request.product_website.trim().is_empty() {
            return Err(PipelineError::InvalidRequest(
                "product website must not be empty".to_string(),
            ));
        }

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();
        info!(%run_id, website = %request.product_website, "Pipeline: starting");

        // Stage 1-2: content crew
        let content_inputs = BTreeMap::from([
            (
                "product_website".to_string(),
                request.product_website.clone(),
            ),
            (
                "product_details".to_string(),
                request.product_details.clone(),
            ),
        ]);
        let content = content_crew(&self.roster, self.text.clone())
            .run(&content_inputs, trace)
            .await
            .map_err(|source| {
                error!(%run_id, stage = %Stage::Content, error = %source, "Pipeline aborted");
                PipelineError::Crew {
                    stage: Stage::Content,
                    source,
                }
            })?;
        let generated_copy = content.final_output().to_string();
        info!(%run_id, stage = %Stage::Content, chars = generated_copy.len(), "Copy generated");

        // Stage 3-4: media crew
        let media_inputs = BTreeMap::from([
            ("ad_copy".to_string(), generated_copy.clone()),
            (
                "product_details".to_string(),
                request.product_details.clone(),
            ),
        ]);
        let media = media_crew(&self.roster, self.text.clone())
            .run(&media_inputs, trace)
            .await
            .map_err(|source| {
                error!(%run_id, stage = %Stage::Media, error = %source, "Pipeline aborted");
                PipelineError::Crew {
                    stage: Stage::Media,
                    source,
                }
            })?;
        let generated_image_prompt = media.final_output().to_string();
        info!(%run_id, stage = %Stage::Media, "Image prompt generated");

        let mut run = PipelineRun {
            run_id,
            started_at,
            finished_at: started_at,
            generated_copy,
            generated_image_prompt,
            generated_image_url: None,
            image_error: None,
            content_outputs: content.task_outputs,
            media_outputs: media.task_outputs,
            posts: Vec::new(),
        };

        // Stage 5: image
        match self
            .image
            .generate_image(
                &run.generated_image_prompt,
                ImageSize::Square,
                ImageQuality::Standard,
            )
            .await
        {
            Ok(url) => {
                info!(%run_id, stage = %Stage::Image, url = %url, "Image generated");
                run.generated_image_url = Some(url);
            }
            Err(e) => {
                warn!(%run_id, stage = %Stage::Image, error = %e, "Image generation failed; skipping posting");
                run.image_error = Some(e.to_string());
            }
        }

        // Stage 6: posting
        if run.generated_image_url.is_some() {
            run.posts = self.publish(&run, credentials).await;
        }

        run.finished_at = Utc::now();
        info!(
            %run_id,
            posted = run.posted_count(),
            attempted = run.posts.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Pipeline: complete"
        );
        Ok(run)
    }

    /// Called once per run, from `run` only.
    async fn publish(&self, run: &PipelineRun, credentials: &Credentials) -> Vec<PostOutcome> {
        let Some(image_url) = run.generated_image_url.as_deref() else {
            return Vec::new();
        };
        if credentials.is_empty() {
            info!(run_id = %run.run_id, stage = %Stage::Posting, "No credentials; nothing to post");
            return Vec::new();
        }
        self.publishers
            .publish_all(image_url, &run.generated_copy, credentials)
            .await
    }
}
