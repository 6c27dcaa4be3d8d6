use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::params;
use sprite_forge_lib::{run_import, scan_image_files};

/// Create the five type folders under a fresh asset root.
fn make_asset_root(dir: &Path) -> PathBuf {
    let root = dir.join("sprites");
    for folder in ["maps", "houses", "zepps", "characters", "decorations"] {
        fs::create_dir_all(root.join(folder)).unwrap();
    }
    root
}

/// Write a real square PNG so header reads see actual dimensions.
fn write_png(path: &Path, size: u32) {
    image::RgbaImage::new(size, size).save(path).unwrap();
}

/// Create a schema'd database file seeded with the lookup tables.
fn make_db(dir: &Path) -> PathBuf {
    let path = dir.join("ra.db3");
    let conn = sprite_forge_db::open_database(&path).unwrap();
    sprite_forge_db::create_schema(&conn).unwrap();

    for action in ["walk", "idle"] {
        conn.execute(
            "INSERT INTO sprite_action (sprite_action_name) VALUES (?1)",
            params![action],
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO sprite_megatile_size (sprite_name, tiled_width, tiled_height)
         VALUES ('barn', 2, 2)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO sprite_slice_meta
         (match_text, start_frame, end_frame, frame_seconds, event_id, event_json)
         VALUES ('hero/.*', 0, 0, 0.5, 3, '{\"sound\":\"step\"}')",
        [],
    )
    .unwrap();

    path
}

#[test]
fn fractal_and_flat_files_import_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    let db = make_db(dir.path());

    let hero = root.join("characters/hero");
    fs::create_dir_all(&hero).unwrap();
    write_png(&hero.join("hero_walk_UP_02.png"), 32);
    write_png(&hero.join("hero_walk_UP_03.png"), 32);
    write_png(&root.join("maps/tree01.png"), 64);

    let report = run_import(&root, &db, false).unwrap();
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.sprites_found, 2);
    assert_eq!(report.sprites_inserted, 2);
    assert_eq!(report.slices_inserted, 3);
    // tree01 matches no action pattern.
    assert_eq!(report.action_misses, 1);

    let conn = sprite_forge_db::open_database(&db).unwrap();

    let (image_count, support, pixels, sprite_type): (i64, i64, i64, String) = conn
        .query_row(
            "SELECT image_count, direction_support, pixels, type
             FROM sprite WHERE sprite_name = 'hero'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .unwrap();
    assert_eq!(image_count, 2);
    assert_eq!(support, 1);
    assert_eq!(pixels, 32);
    assert_eq!(sprite_type, "characters");

    let tree_count: i64 = conn
        .query_row(
            "SELECT image_count FROM sprite WHERE sprite_name = 'tree01'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tree_count, 1);

    // Both hero slices share the resolved id and carry the rule metadata.
    let hero_slices: Vec<(i64, i64, String, f64, i64)> = {
        let mut stmt = conn
            .prepare(
                "SELECT sprite_id, frame_number, direction, frame_seconds, event_id
                 FROM sprite_slice WHERE unity_path LIKE 'hero/%'
                 ORDER BY frame_number",
            )
            .unwrap();
        stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
    };
    assert_eq!(hero_slices.len(), 2);
    assert_eq!(hero_slices[0].1, 2);
    assert_eq!(hero_slices[1].1, 3);
    assert_eq!(hero_slices[0].0, hero_slices[1].0);
    for (_, _, direction, frame_seconds, event_id) in &hero_slices {
        assert_eq!(direction, "UP");
        assert_eq!(*frame_seconds, 0.5);
        assert_eq!(*event_id, 3);
    }

    // The flat file got the default metadata and a bare unity path.
    let (unity_path, frame_seconds, action_id): (String, f64, i64) = conn
        .query_row(
            "SELECT unity_path, frame_seconds, sprite_action_id
             FROM sprite_slice WHERE unity_path = 'tree01'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(unity_path, "tree01");
    assert_eq!(frame_seconds, 0.08);
    assert_eq!(action_id, 0);
}

#[test]
fn rerunning_the_import_duplicates_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    let db = make_db(dir.path());
    write_png(&root.join("maps/tree01.png"), 16);

    run_import(&root, &db, false).unwrap();
    run_import(&root, &db, false).unwrap();

    let conn = sprite_forge_db::open_database(&db).unwrap();
    let sprites: i64 = conn
        .query_row("SELECT COUNT(*) FROM sprite", [], |row| row.get(0))
        .unwrap();
    let slices: i64 = conn
        .query_row("SELECT COUNT(*) FROM sprite_slice", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sprites, 2);
    assert_eq!(slices, 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    let db = make_db(dir.path());
    write_png(&root.join("maps/tree01.png"), 16);

    let report = run_import(&root, &db, true).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.sprites_found, 1);
    assert_eq!(report.sprites_inserted, 0);
    assert_eq!(report.slices_inserted, 0);

    let conn = sprite_forge_db::open_database(&db).unwrap();
    let sprites: i64 = conn
        .query_row("SELECT COUNT(*) FROM sprite", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sprites, 0);
}

#[test]
fn tiled_dimensions_resolve_from_the_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    let db = make_db(dir.path());
    write_png(&root.join("houses/barn.png"), 128);

    run_import(&root, &db, false).unwrap();

    let conn = sprite_forge_db::open_database(&db).unwrap();
    let (width, height): (i64, i64) = conn
        .query_row(
            "SELECT tiled_width, tiled_height FROM sprite WHERE sprite_name = 'barn'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!((width, height), (2, 2));
}

// -- Scanner behavior --

#[test]
fn scan_skips_unsupported_and_too_deep_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());

    write_png(&root.join("maps/tree01.png"), 16);
    fs::write(root.join("maps/notes.txt"), "not an image").unwrap();
    // Extension check is case-sensitive.
    image::RgbaImage::new(16, 16)
        .save_with_format(root.join("maps/LOUD.PNG"), image::ImageFormat::Png)
        .unwrap();

    // A third level under a fractal group is silently ignored.
    let deep = root.join("characters/hero/extra");
    fs::create_dir_all(&deep).unwrap();
    write_png(&deep.join("buried_01.png"), 16);
    write_png(&root.join("characters/hero/hero_01.png"), 16);

    let files = scan_image_files(&root).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    // Type folders are walked in fixed order; maps precede characters.
    assert_eq!(names, vec!["tree01.png", "hero_01.png"]);
}

#[test]
fn scan_marks_fractal_files_with_their_parent() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    let hero = root.join("characters/hero");
    fs::create_dir_all(&hero).unwrap();
    write_png(&hero.join("hero_01.png"), 16);
    write_png(&root.join("maps/tree01.png"), 16);

    let files = scan_image_files(&root).unwrap();

    let fractal = files.iter().find(|f| f.name == "hero_01.png").unwrap();
    assert!(fractal.is_fractal);
    assert_eq!(fractal.parent, "hero");
    assert_eq!(fractal.sprite_name(), "hero");
    assert_eq!(fractal.unity_path(), "hero/hero_01");

    let flat = files.iter().find(|f| f.name == "tree01.png").unwrap();
    assert!(!flat.is_fractal);
    assert_eq!(flat.parent, "maps");
    assert_eq!(flat.unity_path(), "tree01");
}

#[test]
fn a_missing_type_folder_aborts_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    fs::remove_dir(root.join("zepps")).unwrap();

    assert!(scan_image_files(&root).is_err());
}

#[test]
fn a_corrupt_image_header_aborts_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_asset_root(dir.path());
    fs::write(root.join("maps/broken.png"), b"definitely not a png").unwrap();

    let err = scan_image_files(&root).unwrap_err();
    assert!(err.to_string().contains("broken.png"));
}
