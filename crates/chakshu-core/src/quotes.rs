//! Built-in astronomy quotes shown by the typewriter.

/// The quotes cycled under the Start button, in display order.
pub const ASTRONOMY_QUOTES: [&str; 15] = [
    "The cosmos is within us. We are made of star-stuff. – Carl Sagan",
    "To confine our attention to terrestrial matters would be to limit the human spirit. – Stephen Hawking",
    "Somewhere, something incredible is waiting to be known. – Carl Sagan",
    "Across the sea of space, the stars are other suns. – Carl Sagan",
    "Equipped with his five senses, man explores the universe around him and calls the adventure Science. – Edwin Hubble",
    "The nitrogen in our DNA, the calcium in our teeth, the iron in our blood, the carbon in our apple pies were made in the interiors of collapsing stars. – Carl Sagan",
    "We are all in the gutter, but some of us are looking at the stars. – Oscar Wilde",
    "The universe is under no obligation to make sense to you. – Neil deGrasse Tyson",
    "Look up at the stars and not down at your feet. – Stephen Hawking",
    "For small creatures such as we, the vastness is bearable only through love. – Carl Sagan",
    "Not only do we live among the stars, the stars live within us. – Neil deGrasse Tyson",
    "Astronomy compels the soul to look upwards and leads us from this world to another. – Plato",
    "The sky calls to us. If we do not destroy ourselves, we will one day venture to the stars. – Carl Sagan",
    "The universe is a pretty big place. If it's just us, seems like an awful waste of space. – Carl Sagan",
    "Every one of us is, in the cosmic perspective, precious. – Carl Sagan",
];

/// Owned copy of [`ASTRONOMY_QUOTES`].
pub fn default_quotes() -> Vec<String> {
    ASTRONOMY_QUOTES.iter().map(|q| q.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quotes_keep_order() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 15);
        assert!(quotes[0].starts_with("The cosmos is within us."));
        assert!(quotes[14].ends_with("precious. – Carl Sagan"));
    }

    #[test]
    fn no_quote_is_empty() {
        assert!(ASTRONOMY_QUOTES.iter().all(|q| !q.is_empty()));
    }
}
