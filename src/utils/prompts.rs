use crate::models::SearchResult;

pub fn needs_search_prompt(message: &str) -> String {
    format!(
        r#"Analyze if the following message is a question that would benefit from current, factual information from the web.
Respond with only 'YES' or 'NO'.

Examples that need web search:
- Questions about current events, news, or recent developments
- Questions about specific facts, statistics, or data
- Questions about technology, companies, or products
- Questions about recent research or studies
- Questions about current prices, availability, or status

Examples that don't need web search:
- General philosophical questions
- Personal advice or opinions
- Creative writing prompts
- Simple greetings or casual conversation

Message: {}

Response:"#,
        message
    )
}

/// Renders results as `Title/Snippet/Link` blocks separated by blank lines, preserving order.
pub fn format_search_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "Title: {}\nSnippet: {}\nLink: {}",
                result.title, result.snippet, result.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn answer_with_results_prompt(message: &str, results: &[SearchResult]) -> String {
    format!(
        r#"You are an AI assistant with access to current web information.
Answer the user's question comprehensively using the provided search results and your knowledge.

Guidelines:
- Provide a thorough, accurate, and helpful answer
- Use the search results to support your response with current information
- Cite specific sources when referencing search results
- If search results don't fully answer the question, use your knowledge to fill gaps
- Be clear about what information comes from web search vs. your training data
- Structure your response logically and clearly

User's Question: {}

Web Search Results:
{}

Comprehensive Answer:"#,
        message,
        format_search_results(results)
    )
}

pub fn direct_answer_prompt(message: &str) -> String {
    format!(
        r#"You are an AI assistant. Answer the user's question or respond to their message in a helpful, intelligent, and comprehensive manner.

Guidelines:
- Provide thoughtful, accurate, and helpful responses
- Be conversational but informative
- If it's a question, give a complete answer
- If it's a statement, respond appropriately
- Use your knowledge to provide valuable insights

User's Message: {}

Response:"#,
        message
    )
}

pub fn fallback_answer(message: &str) -> String {
    format!(
        "I apologize, but I encountered an error while processing your message: '{}'. Please try rephrasing your question or let me know how I can help you in a different way.",
        message
    )
}
