use crate::models::RemovalCounter;

/// Render the removal counts as the human-readable report shown to the user:
/// total first, then one line per character label in accumulation order.
/// Pure formatting; no I/O.
pub fn summarize(counter: &RemovalCounter) -> String {
    let mut message = format!("Total count of bad characters: {}\n\n", counter.total());
    message.push_str("Individual character counts:\n");
    for (label, count) in counter.iter() {
        message.push_str(&format!("Character '{}': {}\n", label, count));
    }
    message
}
