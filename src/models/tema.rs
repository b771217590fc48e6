use serde::Serialize;

/// `mdl_neuroopositor_temas` 中的一行。文本字段保存的是已经转义过的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemaRow {
    pub bloque: i64,
    pub numero: String,
    pub titulo: String,
    pub descripcion: String,
    pub nivel_dificultad: i64,
    pub posicion_x: i64,
    pub posicion_y: i64,
    pub posicion_z: i64,
    pub color: String,
    pub timecreated: i64,
    pub timemodified: i64,
}
