use itertools::Itertools;
use std::io::Write;

use crate::models::TemaRow;

pub const TEMAS_TABLE: &str = "mdl_neuroopositor_temas";

const COLUMNS: [&str; 11] = [
    "bloque",
    "numero",
    "titulo",
    "descripcion",
    "nivel_dificultad",
    "posicion_x",
    "posicion_y",
    "posicion_z",
    "color",
    "timecreated",
    "timemodified",
];

/// 生成一条以换行结尾的 INSERT 语句。`row` 中的文本必须已经转义。
pub fn format_insert(row: &TemaRow) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}, '{}', '{}', '{}', {}, {}, {}, {}, '{}', {}, {});\n",
        TEMAS_TABLE,
        COLUMNS.iter().join(", "),
        row.bloque,
        row.numero,
        row.titulo,
        row.descripcion,
        row.nivel_dificultad,
        row.posicion_x,
        row.posicion_y,
        row.posicion_z,
        row.color,
        row.timecreated,
        row.timemodified,
    )
}

pub fn write_insert<W: Write>(out: &mut W, row: &TemaRow) -> std::io::Result<()> {
    out.write_all(format_insert(row).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TemaRow {
        TemaRow {
            bloque: 3,
            numero: "7".to_string(),
            titulo: "L''Estat".to_string(),
            descripcion: "Hello''s\\nWorld".to_string(),
            nivel_dificultad: 1,
            posicion_x: 0,
            posicion_y: 0,
            posicion_z: 0,
            color: "#FFFFFF".to_string(),
            timecreated: 1_700_000_000,
            timemodified: 1_700_000_000,
        }
    }

    #[test]
    fn formats_fixed_shape_statement() {
        let sql = format_insert(&sample_row());
        assert_eq!(
            sql,
            "INSERT INTO mdl_neuroopositor_temas (bloque, numero, titulo, descripcion, \
             nivel_dificultad, posicion_x, posicion_y, posicion_z, color, timecreated, \
             timemodified) VALUES (3, '7', 'L''Estat', 'Hello''s\\nWorld', 1, 0, 0, 0, \
             '#FFFFFF', 1700000000, 1700000000);\n"
        );
    }

    #[test]
    fn writes_exactly_one_line() {
        let mut buf = Vec::new();
        write_insert(&mut buf, &sample_row()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with(");\n"));
    }
}
