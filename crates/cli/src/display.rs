// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use reel_core::{CastMember, MovieDetails, TopMovie};

/// Maximum line width for wrapped descriptions (excluding 4-space indent).
const WRAP_WIDTH: usize = 76;

/// Placeholder for an absent field.
const MISSING: &str = "-";

/// Wrap a single line of text at word boundaries.
///
/// Text that already contains newlines is returned unchanged.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// `9.3/10`, or `Unknown` when the movie is unrated.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}/10"),
        None => "Unknown".to_string(),
    }
}

/// One ranked entry of the top-rated list, with the poster URL below it.
pub fn format_top_movie(rank: usize, movie: &TopMovie) -> Vec<String> {
    let mut lines = vec![format!(
        "{rank:>2}. {} ({}) {}",
        movie.title.as_deref().unwrap_or(MISSING),
        format_rating(movie.rating),
        movie.id
    )];
    if let Some(url) = &movie.image_url {
        lines.push(format!("    {url}"));
    }
    lines
}

/// The whole top-rated list.
pub fn format_top_movies(movies: &[TopMovie]) -> String {
    if movies.is_empty() {
        return "No top-rated movies.".to_string();
    }
    movies
        .iter()
        .enumerate()
        .flat_map(|(i, movie)| format_top_movie(i + 1, movie))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Tim Robbins as Andy Dufresne (nm0000209)`
pub fn format_cast_member(member: &CastMember) -> String {
    match member.lead_character() {
        Some(character) => format!("{} as {} ({})", member.name, character, member.person_id),
        None => format!("{} ({})", member.name, member.person_id),
    }
}

/// Details view for `reel show`.
pub fn format_movie_details(details: &MovieDetails) -> String {
    let mut output = Vec::new();

    output.push(format!("{} ({})", details.title, details.id));
    output.push(format!(
        "Released: {}",
        details
            .year
            .map_or_else(|| MISSING.to_string(), |y| y.to_string())
    ));
    output.push(format!(
        "Running time: {}",
        details
            .running_time_minutes
            .map_or_else(|| MISSING.to_string(), |m| format!("{m} min"))
    ));
    output.push(format!("Rating: {}", format_rating(details.rating)));
    output.push(format!(
        "Poster: {}",
        details.image_url.as_deref().unwrap_or(MISSING)
    ));

    output.push(String::new());
    output.push("Description:".to_string());
    let description = details
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("Not provided");
    for line in wrap_text(description, WRAP_WIDTH).lines() {
        output.push(format!("    {line}"));
    }

    if !details.cast.is_empty() {
        output.push(String::new());
        output.push("Cast:".to_string());
        for member in &details.cast {
            output.push(format!("  {}", format_cast_member(member)));
        }
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
