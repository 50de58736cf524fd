pub const SYSTEM_PROMPT: &str = "\
You are a sharp, witty sports journalist covering Major League Baseball. You \
have access to live news search. When asked for a story you will search \
recent news (past 24 hours) and write a complete article. Do NOT cite X \
(Twitter) or any social media post as your primary source; cite the original \
outlet, official team statement, or wire service instead.";

const STORY_FORMAT: &str = "\
Format your response EXACTLY like this (two-line header, then body):
TITLE: <headline, 8 words or fewer>

BODY:
<full article, ~250-300 words, plain text, no markdown, no bullet points>

Requirements for the article body:
- Break into logical paragraphs of 1-3 sentences each.
- Start factual and clean, get livelier toward the end.
- Use humor where appropriate.
- Use real words, no slang contractions like \"'em\" or \"snaggin'\".
- Do NOT cite X, Twitter, or any social media as your primary source.
- Do NOT repeat any of the excluded headlines listed above.";

/// Prompt for the next story; `featured_team` only applies to the first one
pub fn story_prompt(featured_team: Option<&str>, written: &[String]) -> String {
    let team_instruction = match featured_team {
        Some(team) => format!(
            "Prefer a story that involves the {} if there is a significant one; \
             otherwise pick the biggest MLB story.",
            team
        ),
        None => "Pick the most significant or interesting MLB story available.".to_string(),
    };

    let mut prompt = format!(
        "Find and write a significant MLB news story from the past 24 hours.\n{}\n",
        team_instruction
    );
    if !written.is_empty() {
        prompt.push_str("Do NOT write about any of these already-covered stories:\n");
        for headline in written {
            prompt.push_str(&format!("  - {}\n", headline));
        }
    }
    prompt.push('\n');
    prompt.push_str(STORY_FORMAT);
    prompt
}
