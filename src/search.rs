use crate::cell::CellType;
use crate::grid::{Grid, Point};

/// Recherche en largeur (BFS).
///
/// Maintient un ensemble de chemins partiels candidats, initialisé au seul
/// chemin `[départ]`, et les étend d'un pas à chaque tour. Le premier voisin
/// d'arrivée rencontré termine immédiatement la recherche: pour cet ordre
/// d'expansion le chemin renvoyé est de longueur minimale.
///
/// La détection de cycle est locale à chaque chemin candidat (balayage
/// linéaire du chemin), pas un ensemble global de cases visitées: deux
/// candidats distincts peuvent repasser par la même case.
pub fn breadth_first_search(grid: &Grid) -> Option<Vec<Point>> {
    let mut routes: Vec<Vec<Point>> = vec![vec![grid.start_point()]];

    while !routes.is_empty() {
        let mut new_routes: Vec<Vec<Point>> = Vec::new();

        for route in &routes {
            let last = route[route.len() - 1];

            for nb_point in Grid::point_neighbours(last) {
                let kind = match grid.kind_at(nb_point) {
                    Some(kind) => kind,
                    None => continue, // point off the grid
                };

                if kind == CellType::Wall {
                    continue; // point goes into a wall
                }

                if kind == CellType::End {
                    // we found the solution
                    let mut solution = route.clone();
                    solution.push(nb_point);
                    return Some(solution);
                }

                if route.contains(&nb_point) {
                    continue; // point already visited on this route
                }

                let mut new_route = route.clone();
                new_route.push(nb_point);
                new_routes.push(new_route);
            }
        }

        routes = new_routes;
    }

    eprintln!("We did not find any solutions for the maze!");
    None
}

/// Recherche en profondeur (DFS) avec pile de retour arrière explicite.
///
/// `route` est le chemin actif; `possible_steps` garde, pour chaque position
/// du chemin au-delà du départ, les voisins alternatifs pas encore essayés.
/// La pile borne la mémoire à la longueur du chemin, sans récursion.
///
/// Comme pour le BFS, la détection de cycle est limitée au chemin actif: une
/// case abandonnée lors d'un retour arrière peut être revisitée par une
/// autre branche.
pub fn depth_first_search(grid: &Grid) -> Option<Vec<Point>> {
    let mut route: Vec<Point> = vec![grid.start_point()];
    let mut possible_steps: Vec<Vec<Point>> = Vec::new();

    while !route.is_empty() {
        let last = route[route.len() - 1];

        // Voisins encore valables de la dernière position du chemin.
        let mut nb_points: Vec<Point> = Vec::new();
        for nb_point in Grid::point_neighbours(last) {
            let kind = match grid.kind_at(nb_point) {
                Some(kind) => kind,
                None => continue,
            };

            if kind == CellType::Wall {
                continue;
            }

            if kind == CellType::End {
                route.push(nb_point);
                return Some(route);
            }

            if route.contains(&nb_point) {
                continue;
            }

            nb_points.push(nb_point);
        }

        if let Some(step) = nb_points.pop() {
            // Avance sur le dernier voisin valable; les autres restent en
            // réserve pour le retour arrière.
            route.push(step);
            possible_steps.push(nb_points);
        } else {
            // Retour arrière: dépile les positions dont toutes les
            // alternatives sont épuisées.
            while matches!(possible_steps.last(), Some(frame) if frame.is_empty()) {
                possible_steps.pop();
                route.pop();
            }

            match possible_steps.last_mut().and_then(Vec::pop) {
                Some(step) => {
                    // Réessaie une branche sœur depuis la même position.
                    let last_idx = route.len() - 1;
                    route[last_idx] = step;
                }
                None => break, // all alternatives exhausted
            }
        }
    }

    eprintln!("We did not find any solutions for the maze!");
    None
}
