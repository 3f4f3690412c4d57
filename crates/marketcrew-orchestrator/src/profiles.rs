use crate::crew::Crew;
use crate::types::Task;
use marketcrew_agent::{AgentProfile, TextGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PRODUCT_ANALYSIS: &str = "product_analysis";
pub const COMPETITOR_ANALYSIS: &str = "competitor_analysis";
pub const CAMPAIGN_DEVELOPMENT: &str = "campaign_development";
pub const INSTAGRAM_AD_COPY: &str = "instagram_ad_copy";
pub const TAKE_PHOTOGRAPH: &str = "take_photograph";

/// Content crew task ids, in execution order.
pub const CONTENT_TASKS: [&str; 4] = [
    PRODUCT_ANALYSIS,
    COMPETITOR_ANALYSIS,
    CAMPAIGN_DEVELOPMENT,
    INSTAGRAM_AD_COPY,
];

/// Media crew task ids, in execution order.
pub const MEDIA_TASKS: [&str; 1] = [TAKE_PHOTOGRAPH];

/// The four marketing agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub analyst: AgentProfile,
    pub strategist: AgentProfile,
    pub creative: AgentProfile,
    pub photographer: AgentProfile,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            analyst: analyst_profile(),
            strategist: strategist_profile(),
            creative: creative_profile(),
            photographer: photographer_profile(),
        }
    }
}

impl Roster {
    pub fn profiles(&self) -> [&AgentProfile; 4] {
        [
            &self.analyst,
            &self.strategist,
            &self.creative,
            &self.photographer,
        ]
    }

    pub fn roles(&self) -> Vec<String> {
        self.profiles().iter().map(|p| p.role.clone()).collect()
    }
}

fn analyst_profile() -> AgentProfile {
    AgentProfile::new(
        "Lead Market Analyst",
        "Conduct amazing analysis of the products and competitors, providing \
         in-depth insights to guide marketing strategies.",
        "As the Lead Market Analyst at a premier digital marketing firm, you \
         specialize in dissecting online business landscapes.",
    )
}

fn strategist_profile() -> AgentProfile {
    AgentProfile::new(
        "Chief Marketing Strategist",
        "Synthesize amazing insights from product analysis to formulate \
         incredible marketing strategies.",
        "You are the Chief Marketing Strategist at a leading digital marketing \
         agency, known for crafting bespoke strategies that drive success.",
    )
}

fn creative_profile() -> AgentProfile {
    AgentProfile::new(
        "Creative Content Creator",
        "Develop compelling and innovative content for social media campaigns, \
         with a focus on creating high-impact Instagram ad copies.",
        "As a Creative Content Creator at a top-tier digital marketing agency, \
         you excel in crafting narratives that resonate with audiences on \
         social media. Your expertise lies in turning marketing strategies \
         into engaging stories and visual content that capture attention and \
         inspire action.",
    )
}

fn photographer_profile() -> AgentProfile {
    AgentProfile::new(
        "Senior Photographer",
        "Take the most amazing photographs for instagram ads that capture \
         emotions and convey a compelling message.",
        "As a Senior Photographer at a leading digital marketing agency, you \
         are an expert at taking amazing photographs that inspire and engage. \
         You are now working on a new campaign for a super important customer \
         and you need to take the most amazing photograph.",
    )
}

pub fn product_analysis_task() -> Task {
    Task::new(PRODUCT_ANALYSIS, PRODUCT_ANALYSIS_PROMPT).with_expected_output(
        "A detailed report on the product, its features, target audience and \
         unique selling points.",
    )
}

pub fn competitor_analysis_task() -> Task {
    Task::new(COMPETITOR_ANALYSIS, COMPETITOR_ANALYSIS_PROMPT).with_expected_output(
        "A comparison of at least three competitors with their strengths, \
         weaknesses and positioning.",
    )
}

pub fn campaign_development_task() -> Task {
    Task::new(CAMPAIGN_DEVELOPMENT, CAMPAIGN_DEVELOPMENT_PROMPT).with_expected_output(
        "A campaign plan covering goals, audience, key messages and channels.",
    )
}

pub fn instagram_ad_copy_task() -> Task {
    Task::new(INSTAGRAM_AD_COPY, INSTAGRAM_AD_COPY_PROMPT)
        .with_expected_output("The final ad copy: three short options, one per line.")
}

pub fn take_photograph_task() -> Task {
    Task::new(TAKE_PHOTOGRAPH, TAKE_PHOTOGRAPH_PROMPT).with_expected_output(
        "A single paragraph describing the photograph, ready for an image model.",
    )
}

/// Analyst → analyst → strategist → creative. Expects `product_website`
/// and `product_details` as inputs; its final output is the ad copy.
pub fn content_crew(roster: &Roster, backend: Arc<dyn TextGenerator>) -> Crew {
    let analyst = roster.analyst.clone().bind(backend.clone());
    Crew::new("content")
        .member(analyst.clone(), product_analysis_task())
        .member(analyst, competitor_analysis_task())
        .member(
            roster.strategist.clone().bind(backend.clone()),
            campaign_development_task(),
        )
        .member(roster.creative.clone().bind(backend), instagram_ad_copy_task())
}

/// The photographer alone. Expects `ad_copy` and `product_details`.
pub fn media_crew(roster: &Roster, backend: Arc<dyn TextGenerator>) -> Crew {
    Crew::new("media").member(roster.photographer.clone().bind(backend), take_photograph_task())
}

const PRODUCT_ANALYSIS_PROMPT: &str = "\
Analyze the given product website: {{ product_website }}.
Extra details provided by the customer: {{ product_details }}.

Focus on identifying unique features, benefits, and the overall narrative \
presented. Your final report should clearly articulate the product's key \
selling points, its market appeal, and suggestions for enhancement or \
positioning. Emphasize the aspects that make the product stand out.";

const COMPETITOR_ANALYSIS_PROMPT: &str = "\
Explore the competitors of the product described here: {{ product_details }}.

Use this product analysis as your starting point:
{{ product_analysis }}

Identify the top 3 competitors and analyze their strategies and positioning. \
Provide a detailed comparison to the competitors.";

const CAMPAIGN_DEVELOPMENT_PROMPT: &str = "\
You're creating a targeted marketing campaign for: {{ product_details }}.

Use this competitive landscape as context:
{{ competitor_analysis }}

Develop a strategy and creative content ideas that will resonate with the \
audience. Ensure that the campaign aligns with the overarching marketing \
goals and speaks directly to the customer's needs.";

const INSTAGRAM_AD_COPY_PROMPT: &str = "\
Craft an engaging Instagram post copy based on this campaign:
{{ campaign_development }}

The copy should be punchy, captivating, concise, and aligned with the \
product marketing strategy. Focus on creating a message that resonates with \
the target audience and highlights the product's unique selling points. \
Your ad copy must be attention-grabbing and should encourage viewers to \
take action.";

const TAKE_PHOTOGRAPH_PROMPT: &str = "\
You are working on a new campaign for a super important customer, and you \
MUST take the most amazing photo ever for an Instagram post regarding the \
product. You have the following copy:
{{ ad_copy }}

This is the product you are working with: {{ product_details }}.

Imagine what the photo you want to take describes, in a paragraph. Focus on \
composition, lighting and mood. Don't mention the brand or logos, and keep \
text out of the picture.";
