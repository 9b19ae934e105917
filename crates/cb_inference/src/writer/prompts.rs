use cb_core::{AppConfig, GenerationRequest};

pub const OUTLINE_MARKER: &str = "Create a detailed outline.";
pub const ARTICLE_MARKER: &str = "Expand the outline into a full article.";
pub const REVISION_MARKER: &str = "Revise the following article to fix these issues";
pub const ARTICLE_SECTION_LABEL: &str = "\nArticle:\n";

/// Company, author and style block shared by the outline and article prompts.
fn context_block(config: &AppConfig, request: &GenerationRequest) -> String {
    format!(
        "Topic: {topic}\n\
         Audience: {audience}\n\
         Platform: {platform}\n\
         Target length: {words} words\n\
         Tone: {tone}\n\
         \n\
         Company description: {description}\n\
         Author bio: {bio}\n\
         Tone rules: {rules}\n\
         Banned phrases: {banned}\n",
        topic = request.topic,
        audience = request.audience,
        platform = request.platform,
        words = request.target_words,
        tone = request.tone,
        description = config.company.description,
        bio = config.author.bio,
        rules = config.style.tone_rules,
        banned = config.style.banned_phrases.join(", "),
    )
}

pub fn outline_prompt(config: &AppConfig, request: &GenerationRequest) -> String {
    format!(
        "You are an expert content strategist writing for {company}. {marker}\n\
         \n\
         {context}\n\
         Requirements:\n\
         - Provide a structured outline with headings and subheadings.\n\
         - Include 3-5 section headings with subheadings.\n\
         - Include specific examples but do not invent client names or results.\n\
         - Add one mini-case or scenario relevant to {company} clients.\n\
         - Add a checklist titled \"What to do next\" with 5 bullet items.\n\
         - Provide 5 SEO keywords and a meta description of 155-160 characters.\n\
         - Provide 3 social snippets (LinkedIn, Facebook, Instagram caption) with CTA.\n\
         - Avoid em dashes.\n\
         Return the outline in Markdown.\n",
        company = config.company.name,
        marker = OUTLINE_MARKER,
        context = context_block(config, request),
    )
}

pub fn article_prompt(config: &AppConfig, request: &GenerationRequest, outline: &str) -> String {
    format!(
        "You are an expert writer for {company}. {marker}\n\
         \n\
         {context}\n\
         Outline:\n\
         {outline}\n\
         \n\
         Article requirements:\n\
         - Must include Hook, Context, 3-5 sections with subheadings, examples, a mini-case scenario, \
         a \"What to do next\" checklist, and a short Conclusion.\n\
         - Use \"# \" for the title and \"## Hook\", \"## Context\", \"## What to do next\", \"## Conclusion\" as section headings.\n\
         - Provide SEO keywords and meta description near the end in a clearly labeled section, \
         as lines starting with \"SEO Keywords:\" (5 comma-separated) and \"Meta Description:\" (155-160 characters).\n\
         - Provide 3 social snippets at the end in a section starting with \"Social Snippets:\".\n\
         - Avoid em dashes.\n\
         - Never invent client names or results. Use hypotheses or best practices.\n\
         - Avoid statistics unless provided in the outline.\n\
         Return the full article in Markdown.\n",
        company = config.company.name,
        marker = ARTICLE_MARKER,
        context = context_block(config, request),
        outline = outline,
    )
}

pub fn revision_prompt(article: &str, errors: &[String]) -> String {
    let issues = serde_json::to_string_pretty(errors).unwrap_or_else(|_| errors.join("\n"));
    format!(
        "{marker}:\n\
         {issues}\n\
         \n\
         Rules:\n\
         - Keep the required structure and headings.\n\
         - Remove em dashes.\n\
         - Remove any fabricated claims.\n\
         - Preserve the SEO keywords and meta description if they are valid.\n\
         - Return only the revised Markdown article.\n\
         {label}\
         {article}\n",
        marker = REVISION_MARKER,
        issues = issues,
        label = ARTICLE_SECTION_LABEL,
        article = article,
    )
}
