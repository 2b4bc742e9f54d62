use std::collections::HashMap;
use std::fmt;

use crate::ascii_utils;
use crate::cell::CellType;
use crate::error::MazeError;

/// Position d'une case: (ligne, colonne).
///
/// Les coordonnées sont signées: les voisins hors grille (ligne -1 par
/// exemple) restent représentables et sont simplement absents de la grille.
pub type Point = (i32, i32);

/// Grille du labyrinthe, stockée dans une HashMap.
/// Les clés sont les coordonnées (ligne, colonne) de chaque case.
///
/// La grille est construite une fois depuis le texte puis jamais modifiée:
/// les recherches la lisent, elles n'y écrivent rien.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: HashMap<Point, CellType>,
    corner: (i32, i32),
    start_point: Point,
}

impl Grid {
    /// Construit la grille à partir du texte brut du labyrinthe.
    ///
    /// Les lignes vides et les lignes commençant par `//` (commentaires)
    /// sont ignorées. Toutes les autres lignes doivent avoir la même
    /// longueur, chaque caractère doit être reconnu, et le labyrinthe doit
    /// contenir exactement un caractère de départ.
    pub fn parse(raw: &str) -> Result<Grid, MazeError> {
        let lines: Vec<&str> = raw
            .split('\n')
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .collect();

        let width = lines.first().map_or(0, |line| line.chars().count());
        for (idx, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::InconsistentRowLength {
                    line: idx,
                    expected: width,
                    found,
                });
            }
        }

        let mut cells: HashMap<Point, CellType> = HashMap::new();
        let mut start_point: Option<Point> = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let point = (row as i32, col as i32);
                let ct = CellType::from_char(c).ok_or(MazeError::InvalidCharacter {
                    character: c,
                    position: point,
                })?;

                if ct == CellType::Start {
                    if start_point.is_some() {
                        return Err(MazeError::DuplicateStart(point));
                    }
                    start_point = Some(point);
                }

                cells.insert(point, ct);
            }
        }

        let start_point = start_point.ok_or(MazeError::MissingStart)?;

        Ok(Grid {
            cells,
            corner: (lines.len() as i32, width as i32),
            start_point,
        })
    }

    /// Dimensions (lignes, colonnes) de la grille.
    pub fn corner(&self) -> (i32, i32) {
        self.corner
    }

    /// Le point de départ unique du labyrinthe.
    pub fn start_point(&self) -> Point {
        self.start_point
    }

    /// Type de la case en `point`, ou `None` si le point est hors grille.
    pub fn kind_at(&self, point: Point) -> Option<CellType> {
        self.cells.get(&point).copied()
    }

    /// Vérifie si une case existe.
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains_key(&point)
    }

    /// Les 4 voisins axiaux d'un point, dans un ordre fixe:
    /// bas, haut, droite, gauche.
    ///
    /// Les voisins hors grille ne sont pas filtrés ici, c'est à l'appelant
    /// de les écarter via `kind_at`.
    pub fn point_neighbours(point: Point) -> [Point; 4] {
        [
            (point.0 + 1, point.1),
            (point.0 - 1, point.1),
            (point.0, point.1 + 1),
            (point.0, point.1 - 1),
        ]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ascii_utils::visualize_grid(self))
    }
}
