//! Instructions handed to the models

use super::game_facts::GameFacts;
use crate::modules::provider::domain::entities::Article;
use crate::shared::domain::value_objects::League;
use crate::shared::errors::AppResult;

pub const ARTICLE_INSTRUCTION: &str = "\
You are a professional journalist. Write a tight, lively summary of the \
included news topic. Start clean, but get more wild towards the end. Hit the \
big story, toss in a couple key highlights, and dig up the freshest dirt with \
real sources.

These are the requirements
- Break summary up into logical paragraphs of one to three sentences, but limit word count to 300.
- Use plain text, no markdown or formatting marks.
- Use humor where you can.
- Use real words, no \"'em\", \"youse\", \"snaggin'\", or any other words designed to look like they sound.";

pub const NHL_INSTRUCTION: &str = "\
You are a hilarious sports journalist writing a game recap for a clever \
10-year-old hockey fan who loves the sport and wants to laugh while learning \
about what happened. Your reader knows what goals, penalties, and power plays \
are, so don't waste words on basics.

Tone: funny, witty and slightly snarky, but keep it clean. The entire summary \
must be 300 words or less in a single continuous paragraph of plain text with \
no markdown or special formatting.

You must define exactly one obscure or technical hockey term by following it \
with an asterisk (e.g., term*), such as 'odd-man rush', 'high slot' or \
'forechecking pressure', and give the definition in one sentence after the \
paragraph, starting with the term and an asterisk.";

pub const MLB_INSTRUCTION: &str = "\
You are a sports journalist. Write a concise recap of this baseball game in a \
single paragraph of plain text, no more than 200 words. Lead with the final \
score, then the key scoring plays and the standout performers. No markdown.";

pub const TITLE_INSTRUCTION: &str =
    "Generate a short, compelling title (max 8 words) for this article: ";

const TITLE_CONTEXT_CHARS: usize = 200;

pub fn instruction_for(league: League) -> &'static str {
    match league {
        League::Nhl => NHL_INSTRUCTION,
        _ => MLB_INSTRUCTION,
    }
}

/// Raw game data followed by the league's instruction
pub fn game_prompt(league: League, facts: &GameFacts) -> AppResult<String> {
    let data = serde_json::to_string_pretty(facts)?;
    Ok(format!(
        "Here is the raw data for a sports game:\n\n{}\n\nNow, follow this instruction to summarize it: {}",
        data,
        instruction_for(league)
    ))
}

pub fn article_prompt(article: &Article) -> String {
    format!(
        "Here is a news article:\n\nTitle: {}\n\nSummary: {}\n\nLink: {}\n\nNow, follow this instruction to summarize it: {}",
        article.title, article.summary, article.link, ARTICLE_INSTRUCTION
    )
}

pub fn title_prompt(description: &str) -> String {
    let context: String = description.chars().take(TITLE_CONTEXT_CHARS).collect();
    format!("{}{}", TITLE_INSTRUCTION, context)
}
