use std::sync::Arc;

use crate::application::ports::ChatModel;
use crate::domain::ChatTurn;

/// Fallback reply when the model call fails or the response is malformed.
pub const APOLOGY_REPLY: &str =
    "I apologize, but I encountered an error processing your request.";

const SYSTEM_PROMPT: &str = r#"You are a specialized financial trading assistant using Gemini. You provide expert guidance on stocks, cryptocurrencies, funds, and digital assets. Analyze market trends, give numerical insights (P/E ratios, moving averages, RSI, MACD), and make data-backed recommendations. Maintain a confident, helpful, and slightly friendly tone.

When users ask specific financial questions, answer them directly. For non-financial topics, redirect politely with: "I'm here to help with financial guidance and trading insights. Is there something specific about markets or investments I can assist you with?"

Always provide step-by-step explanations whenever a user asks how to do something, so they can easily follow along.

Whenever a user asks about asset tokenization, first explain it briefly in context — for example:
"Asset tokenization is the process of converting rights to an asset into a digital token on a blockchain, enabling fractional ownership, seamless transfer, and greater liquidity."

Then follow with specific steps if they want to learn more about the tokenization process."#;

/// Single-shot chat responder. The model has no native multi-turn structure,
/// so any prior history is linearized into the prompt text.
pub struct ChatService<C>
where
    C: ChatModel,
{
    model: Arc<C>,
}

impl<C> ChatService<C>
where
    C: ChatModel,
{
    pub fn new(model: Arc<C>) -> Self {
        Self { model }
    }

    /// Never fails at this seam: a model error degrades to a fixed apology.
    pub async fn respond(&self, user_text: &str, history: &[ChatTurn]) -> String {
        let prompt = build_prompt(user_text, history);

        match self.model.generate(&prompt).await {
            Ok(reply) => normalize_reply(&reply),
            Err(e) => {
                tracing::error!(error = %e, "Chat model call failed");
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

fn build_prompt(user_text: &str, history: &[ChatTurn]) -> String {
    let mut prompt = String::with_capacity(SYSTEM_PROMPT.len() + user_text.len() + 64);
    prompt.push_str(SYSTEM_PROMPT);
    prompt.push_str("\n\n");

    for turn in history {
        prompt.push_str(turn.role.as_str());
        prompt.push_str(": ");
        prompt.push_str(&turn.content);
        prompt.push('\n');
    }

    prompt.push_str("User: ");
    prompt.push_str(user_text);
    prompt
}

/// Models occasionally echo the linearized turn label back; strip one
/// leading "Assistant:" if present.
fn normalize_reply(reply: &str) -> String {
    let trimmed = reply.trim();
    trimmed
        .strip_prefix("Assistant:")
        .map(str::trim)
        .unwrap_or(trimmed)
        .to_string()
}
