use std::fmt::Write;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use benchmarking::measure_function_with_times;
use qmap_read::qmap::{self, SliceSource};

const BRUSH_COUNT: usize = 20_000;

fn quake_face(text: &mut String, points: [[f64; 3]; 3]) {
    for [x, y, z] in points {
        write!(text, "( {x} {y} {z} ) ").unwrap();
    }
    text.push_str("wall 0 0 0 1 1\n");
}

fn generate_map() -> String {
    let mut text = String::from(
        "// Game: Quake\n{\n\"classname\" \"worldspawn\"\n\"wad\" \"base.wad\"\n",
    );

    for i in 0..BRUSH_COUNT {
        let x = (i % 100) as f64 * 64.0;
        let y = (i / 100) as f64 * 64.0;
        let (x1, y1) = (x + 64.0, y + 64.0);

        writeln!(text, "// brush {i}\n{{").unwrap();
        quake_face(&mut text, [[x, y, 0.0], [x, y + 1.0, 0.0], [x, y, 1.0]]);
        quake_face(&mut text, [[x, y, 0.0], [x, y, 1.0], [x + 1.0, y, 0.0]]);
        quake_face(&mut text, [[x, y, 0.0], [x + 1.0, y, 0.0], [x, y + 1.0, 0.0]]);
        writeln!(
            text,
            "( {x1} {y1} 64 ) ( {x1} {} 64 ) ( {} {y1} 64 ) \
             wall [ 1 0 0 0 ] [ 0 -1 0 0 ] 0 1 1",
            y1 + 1.0,
            x1 + 1.0
        )
        .unwrap();
        text.push_str("}\n");
    }

    text.push_str("}\n");
    text
}

fn measure_parse_memory(text: String) -> Duration {
    let results = measure_function_with_times(1, move |measurer| {
        measurer.measure(|| {
            let source = SliceSource::new(text.as_bytes());
            let map = qmap::parse_source(source, "generated").unwrap();
            assert_eq!(map.brush_count(), BRUSH_COUNT);
        });
    })
    .unwrap();

    results.elapsed()
}

fn measure_parse_file(path: PathBuf) -> Duration {
    let results = measure_function_with_times(1, move |measurer| {
        measurer.measure(|| {
            let map = qmap::parse(&path).unwrap();
            assert_eq!(map.brush_count(), BRUSH_COUNT);
        });
    })
    .unwrap();

    results.elapsed()
}

fn main() {
    let text = generate_map();
    let byte_count = text.len();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    let path = file.path().to_path_buf();

    println!(
        "Took {:?} to parse {} bytes from memory",
        measure_parse_memory(text),
        byte_count
    );

    println!(
        "Took {:?} to parse {}",
        measure_parse_file(path.clone()),
        path.display()
    );
}
