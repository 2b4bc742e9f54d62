use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde_json::{json, Value};

use crate::error::MazeError;
use crate::grid::{Grid, Point};
use crate::Maze;

/// Les 4 octets magiques en tête d'un fichier d'état sérialisé.
const MAGIC: &[u8; 4] = b"RMZ1";

/// Extension des fichiers d'état sérialisés.
pub const STATE_EXTENSION: &str = "maze";

/// Sérialise l'état complet du labyrinthe dans un fichier.
///
/// Le fichier contient les octets magiques, la taille de la charge utile en
/// u32 petit-boutiste, puis la charge utile JSON: le texte normalisé de la
/// grille et les solutions déjà calculées (y compris une absence de chemin
/// constatée, qui survit donc à la restauration).
pub fn save_maze(maze: &Maze, path: &Path) -> Result<(), MazeError> {
    let payload = json!({
        "grid": maze.grid().to_string(),
        "bfs": solution_to_value(&maze.bfs_solution),
        "dfs": solution_to_value(&maze.dfs_solution),
    })
    .to_string();

    let mut file = File::create(path)?;
    file.write_all(MAGIC)?;
    file.write_u32::<LittleEndian>(payload.len() as u32)?;
    file.write_all(payload.as_bytes())?;
    Ok(())
}

/// Restaure un labyrinthe depuis un fichier d'état sérialisé.
///
/// Le texte de grille embarqué repasse par l'analyse normale: un fichier
/// altéré échoue avec les mêmes erreurs qu'un fichier texte invalide.
pub fn load_maze(path: &Path) -> Result<Maze, MazeError> {
    let mut file = File::open(path)?;

    let mut magic = [0u8; 4];
    file.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(invalid_data(format!(
            "not a serialized maze file: bad magic bytes {:?}",
            magic
        )));
    }

    let size = file.read_u32::<LittleEndian>()?;
    let mut buffer = vec![0; size as usize];
    file.read_exact(&mut buffer)?;

    let payload = String::from_utf8(buffer)
        .map_err(|e| invalid_data(format!("invalid payload: {}", e)))?;
    let state: Value = serde_json::from_str(&payload)
        .map_err(|e| invalid_data(format!("invalid payload: {}", e)))?;

    let raw_grid = state
        .get("grid")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid_data("missing grid text".to_string()))?;

    let mut maze = Maze::new(Grid::parse(raw_grid)?);
    maze.bfs_solution = solution_from_value(state.get("bfs"))?;
    maze.dfs_solution = solution_from_value(state.get("dfs"))?;
    Ok(maze)
}

/// Charge un labyrinthe selon l'extension du fichier source:
/// `.txt` pour le texte brut, `.maze` pour un état sérialisé.
pub fn load_maze_source(path: &Path) -> Result<Maze, MazeError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Maze::from_file(path),
        Some(STATE_EXTENSION) => load_maze(path),
        ext => Err(MazeError::UnknownExtension(
            ext.unwrap_or_default().to_string(),
        )),
    }
}

fn solution_to_value(slot: &Option<Option<Vec<Point>>>) -> Value {
    match slot {
        None => Value::Null,
        Some(None) => json!({ "path": Value::Null }),
        Some(Some(path)) => json!({
            "path": path.iter().map(|&(r, c)| json!([r, c])).collect::<Vec<_>>(),
        }),
    }
}

fn solution_from_value(value: Option<&Value>) -> Result<Option<Option<Vec<Point>>>, MazeError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let path = value
        .get("path")
        .ok_or_else(|| invalid_data("missing path field".to_string()))?;
    if path.is_null() {
        return Ok(Some(None));
    }

    let points = path
        .as_array()
        .ok_or_else(|| invalid_data("path is not an array".to_string()))?;

    let mut solution = Vec::with_capacity(points.len());
    for point in points {
        match point.as_array().map(Vec::as_slice) {
            Some([row, col]) => {
                let row = row
                    .as_i64()
                    .ok_or_else(|| invalid_data("malformed path point".to_string()))?;
                let col = col
                    .as_i64()
                    .ok_or_else(|| invalid_data("malformed path point".to_string()))?;
                solution.push((row as i32, col as i32));
            }
            _ => return Err(invalid_data("malformed path point".to_string())),
        }
    }
    Ok(Some(Some(solution)))
}

fn invalid_data(msg: String) -> MazeError {
    MazeError::Io(io::Error::new(io::ErrorKind::InvalidData, msg))
}
