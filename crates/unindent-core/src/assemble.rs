//! Joining processed lines back together

/// Concatenate `(content, terminator)` pairs.
///
/// Each line keeps its own original terminator; nothing is normalized to
/// `\n`, and a final unterminated line stays unterminated.
pub fn reassemble<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    I::IntoIter: Clone,
{
    let lines = lines.into_iter();
    let capacity = lines
        .clone()
        .map(|(content, terminator)| content.len() + terminator.len())
        .sum();

    let mut result = String::with_capacity(capacity);
    for (content, terminator) in lines {
        result.push_str(content);
        result.push_str(terminator);
    }
    result
}
