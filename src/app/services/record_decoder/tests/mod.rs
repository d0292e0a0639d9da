//! Tests for the fixed-width record decoder


/// Build a fixed-width line of the given length with text fragments placed
/// at specific character offsets, space-padded everywhere else.
pub fn make_line(length: usize, fragments: &[(usize, &str)]) -> String {
    let mut chars = vec![' '; length];
    for (start, text) in fragments {
        for (i, ch) in text.chars().enumerate() {
            chars[start + i] = ch;
        }
    }
    chars.into_iter().collect()
}

/// A well-formed `PONOT` metadata line for Espoo keskus
pub fn sample_postal_code_line() -> String {
    make_line(
        220,
        &[
            (0, "PONOT"),
            (5, "20240503"),
            (13, "02100"),
            (18, "Espoo keskus"),
            (48, "Esbo centrum"),
            (78, "Espoo"),
            (90, "Esbo"),
            (102, "19800101"),
            (110, "1"),
            (111, "01"),
            (116, "Uusimaa"),
            (146, "Nyland"),
            (176, "049"),
            (179, "Espoo"),
            (199, "Esbo"),
            (219, "2"),
        ],
    )
}

/// A well-formed `KATUN` address line for Keskustie 101-107 in Espoo keskus
pub fn sample_street_address_line() -> String {
    make_line(
        256,
        &[
            (0, "KATUN"),
            (5, "20240503"),
            (13, "02100"),
            (18, "Espoo keskus"),
            (48, "Esbo centrum"),
            (78, "Espoo"),
            (90, "Esbo"),
            (102, "Keskustie"),
            (132, "Centralvägen"),
            (186, "1"),
            (187, "101"),
            (200, "107"),
            (213, "049"),
            (216, "Espoo"),
            (236, "Esbo"),
        ],
    )
}
