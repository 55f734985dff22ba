/// Markers the speech recognizer writes in place of a transcript when it had no usable audio.
pub const INVALID_TRANSCRIPT_MARKERS: [&str; 5] = [
    "[Could not understand audio]",
    "[Speech recognition service unavailable]",
    "[Error",
    "[No audio]",
    "Audio not clear",
];

/// Returns `false` for blank transcripts and for recognizer error markers.
pub fn is_valid_transcript(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    !INVALID_TRANSCRIPT_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_transcripts_are_invalid() {
        assert!(!is_valid_transcript(""));
        assert!(!is_valid_transcript("   \n\t"));
    }

    #[test]
    fn recognizer_markers_are_invalid_anywhere_in_text() {
        for marker in INVALID_TRANSCRIPT_MARKERS {
            assert!(!is_valid_transcript(marker), "{marker} should be invalid");
        }
        assert!(!is_valid_transcript("[Error: timeout after 30s]"));
        assert!(!is_valid_transcript("partial words... Audio not clear"));
    }

    #[test]
    fn spoken_answers_are_valid() {
        assert!(is_valid_transcript(
            "I enjoy building data pipelines and mentoring new engineers."
        ));
        assert!(is_valid_transcript("[Laughs] well, my biggest strength is focus"));
    }
}
