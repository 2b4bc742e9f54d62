use std::collections::HashMap;

/// Représente le type d'une case du labyrinthe.
///
/// Chaque type correspond à un caractère unique dans le fichier texte:
/// `' '` (case libre), `'#'` (mur), `'S'` (départ), `'E'` (arrivée).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Free,
    Wall,
    Start,
    End,
}

/// Les quatre types de cases, dans l'ordre de déclaration.
pub const ALL_CELL_TYPES: [CellType; 4] = [
    CellType::Free,
    CellType::Wall,
    CellType::Start,
    CellType::End,
];

lazy_static::lazy_static! {
    /// Table inverse caractère -> type, construite une seule fois.
    static ref CHARS_TO_CT: HashMap<char, CellType> = {
        let mut table = HashMap::new();
        for ct in ALL_CELL_TYPES {
            table.insert(ct.as_char(), ct);
        }
        table
    };
}

impl CellType {
    /// Caractère canonique du type de case.
    pub fn as_char(self) -> char {
        match self {
            CellType::Free => ' ',
            CellType::Wall => '#',
            CellType::Start => 'S',
            CellType::End => 'E',
        }
    }

    /// Retrouve le type de case correspondant à un caractère du fichier,
    /// ou `None` si le caractère n'est pas reconnu.
    pub fn from_char(c: char) -> Option<CellType> {
        CHARS_TO_CT.get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for ct in ALL_CELL_TYPES {
            assert_eq!(CellType::from_char(ct.as_char()), Some(ct));
        }
    }

    #[test]
    fn test_from_char_rejects_unknown() {
        assert_eq!(CellType::from_char('X'), None);
        assert_eq!(CellType::from_char('*'), None);
        assert_eq!(CellType::from_char('/'), None);
    }

    #[test]
    fn test_canonical_chars() {
        assert_eq!(CellType::Free.as_char(), ' ');
        assert_eq!(CellType::Wall.as_char(), '#');
        assert_eq!(CellType::Start.as_char(), 'S');
        assert_eq!(CellType::End.as_char(), 'E');
    }
}
