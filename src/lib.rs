use std::fs;
use std::path::Path;

pub mod ascii_utils;
pub mod cell;
pub mod error;
pub mod grid;
pub mod persist;
pub mod search;

pub use crate::cell::CellType;
pub use crate::error::MazeError;
pub use crate::grid::{Grid, Point};

// -----------------------------------------------------------------------------
// Maze
// -----------------------------------------------------------------------------

/// Un labyrinthe et ses solutions en cache.
///
/// La grille est immuable; chaque algorithme de recherche est exécuté au
/// plus une fois par instance, et son résultat (chemin trouvé ou absence de
/// chemin) est conservé pour les rendus suivants.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
    // None: pas encore calculé; Some(None): calculé, pas de chemin.
    bfs_solution: Option<Option<Vec<Point>>>,
    dfs_solution: Option<Option<Vec<Point>>>,
}

impl Maze {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            bfs_solution: None,
            dfs_solution: None,
        }
    }

    /// Construit un labyrinthe depuis le texte brut d'un fichier `.txt`.
    pub fn from_text(raw: &str) -> Result<Self, MazeError> {
        Ok(Self::new(Grid::parse(raw)?))
    }

    /// Construit un labyrinthe depuis un fichier texte.
    pub fn from_file(path: &Path) -> Result<Self, MazeError> {
        let raw = fs::read_to_string(path)?;
        Self::from_text(&raw)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Résout le labyrinthe en largeur, ou renvoie le chemin déjà calculé.
    pub fn solve_bfs(&mut self) -> Option<&[Point]> {
        if self.bfs_solution.is_none() {
            self.bfs_solution = Some(search::breadth_first_search(&self.grid));
        }
        self.bfs_solution.as_ref().and_then(|s| s.as_deref())
    }

    /// Résout le labyrinthe en profondeur, ou renvoie le chemin déjà calculé.
    pub fn solve_dfs(&mut self) -> Option<&[Point]> {
        if self.dfs_solution.is_none() {
            self.dfs_solution = Some(search::depth_first_search(&self.grid));
        }
        self.dfs_solution.as_ref().and_then(|s| s.as_deref())
    }

    /// Rend le diagramme du chemin BFS, en le calculant d'abord si besoin.
    ///
    /// Renvoie `None` quand aucun chemin n'existe; l'absence de solution est
    /// elle aussi mise en cache, la recherche ne sera pas relancée.
    pub fn view_bfs(&mut self) -> Option<String> {
        self.solve_bfs();
        let solution = self.bfs_solution.as_ref()?.as_deref()?;
        Some(ascii_utils::visualize_solution(&self.grid, solution))
    }

    /// Rend le diagramme du chemin DFS, en le calculant d'abord si besoin.
    pub fn view_dfs(&mut self) -> Option<String> {
        self.solve_dfs();
        let solution = self.dfs_solution.as_ref()?.as_deref()?;
        Some(ascii_utils::visualize_solution(&self.grid, solution))
    }
}

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAZE: &str = "S  \n # \n  E\n";

    #[test]
    fn test_view_bfs_overlay() {
        let mut maze = Maze::from_text(SMALL_MAZE).unwrap();

        let expected = "\
        *  \n\
        *# \n\
        ***\n";

        assert_eq!(maze.view_bfs().as_deref(), Some(expected));
    }

    #[test]
    fn test_view_dfs_overlay() {
        let mut maze = Maze::from_text(SMALL_MAZE).unwrap();

        let expected = "***\n #*\n  *\n";

        assert_eq!(maze.view_dfs().as_deref(), Some(expected));
    }

    #[test]
    fn test_solutions_are_cached() {
        let mut maze = Maze::from_text(SMALL_MAZE).unwrap();

        // Même allocation aux deux appels: la recherche n'a tourné qu'une
        // fois et le rendu réutilise le chemin en cache.
        let first = maze.solve_bfs().map(|p| p.as_ptr());
        let second = maze.solve_bfs().map(|p| p.as_ptr());
        assert!(first.is_some());
        assert_eq!(first, second);

        let first = maze.solve_dfs().map(|p| p.as_ptr());
        let second = maze.solve_dfs().map(|p| p.as_ptr());
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_twice_is_identical() {
        let mut maze = Maze::from_text(SMALL_MAZE).unwrap();

        let once = maze.view_bfs();
        let twice = maze.view_bfs();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_not_found_is_cached() {
        let mut maze = Maze::from_text("S#\n# \n").unwrap();

        assert_eq!(maze.view_bfs(), None);
        assert_eq!(maze.bfs_solution, Some(None));
        assert_eq!(maze.view_bfs(), None);

        assert_eq!(maze.solve_dfs(), None);
        assert_eq!(maze.dfs_solution, Some(None));
    }

    #[test]
    fn test_view_does_not_run_the_other_algorithm() {
        let mut maze = Maze::from_text(SMALL_MAZE).unwrap();

        maze.view_bfs();
        assert!(maze.bfs_solution.is_some());
        assert_eq!(maze.dfs_solution, None);
    }

    #[test]
    fn test_from_text_rejects_malformed_maze() {
        assert!(matches!(
            Maze::from_text("  \n  \n"),
            Err(MazeError::MissingStart)
        ));
    }
}
