//! UI文言の静的翻訳テーブル（en / es）
//!
//! バックエンドへ渡す言語コードと画面文言の両方をここで解決する。
//! 未知の連載状態・関連種別ラベルはそのまま表示する。

use crate::types::SearchResult;

/// 対応ロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// バックエンドの lang フィールドに渡す2文字コード
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// EN ⇔ ES 切り替え
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    /// 翻訳テーブル
    pub fn t(self) -> &'static Translations {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }
}

/// 画面文言一式
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,

    pub upload_title: &'static str,
    pub upload_subtitle: &'static str,
    pub drop_active: &'static str,
    pub scanning: &'static str,

    pub search: &'static str,
    pub crop_image: &'static str,
    pub search_this_area: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,

    pub search_again: &'static str,
    pub unknown_title: &'static str,
    pub page: &'static str,
    pub synopsis: &'static str,
    pub no_synopsis: &'static str,
    pub author: &'static str,
    pub related_works: &'static str,

    pub details: &'static str,
    pub chapters: &'static str,
    pub status: &'static str,
    pub published: &'static str,
    pub score: &'static str,

    pub sources: &'static str,
    pub official_sources: &'static str,
    pub unofficial_sources: &'static str,

    pub not_what_you_looking_for: &'static str,

    pub recent_searches: &'static str,
    pub clear_history: &'static str,
    pub confirm_clear_title: &'static str,
    pub confirm_clear_message: &'static str,

    pub no_match_title: &'static str,
    pub no_match_message: &'static str,

    pub error: &'static str,
    pub invalid_file_type: &'static str,
    pub file_too_large: &'static str,

    pub status_publishing: &'static str,
    pub status_finished: &'static str,
    pub status_on_hiatus: &'static str,
    pub status_discontinued: &'static str,
    pub status_not_yet_aired: &'static str,

    pub prequel: &'static str,
    pub sequel: &'static str,
    pub spin_off: &'static str,
    pub side_story: &'static str,
    pub parent_story: &'static str,
    pub alternative_setting: &'static str,
    pub alternative_version: &'static str,
}

impl Translations {
    /// 連載状態ラベルの解決（未知の値はそのまま返す）
    pub fn status_label<'a>(&self, raw: &'a str) -> &'a str {
        match raw {
            "Publishing" => self.status_publishing,
            "Finished" => self.status_finished,
            "On Hiatus" => self.status_on_hiatus,
            "Discontinued" => self.status_discontinued,
            "Not yet aired" => self.status_not_yet_aired,
            other => other,
        }
    }

    /// 関連種別ラベルの解決（未知の値はそのまま返す）
    pub fn relation_label<'a>(&self, raw: &'a str) -> &'a str {
        match raw {
            "Prequel" => self.prequel,
            "Sequel" => self.sequel,
            "Spin-Off" => self.spin_off,
            "Side Story" => self.side_story,
            "Parent Story" => self.parent_story,
            "Alternative Setting" => self.alternative_setting,
            "Alternative Version" => self.alternative_version,
            other => other,
        }
    }
}

/// 言語に応じたあらすじの選択（es変種 → 原文 の順でフォールバック）
pub fn localized_synopsis(result: &SearchResult, lang: Lang) -> Option<&str> {
    let variant = match lang {
        Lang::En => result.synopsis_en.as_deref(),
        Lang::Es => result.synopsis_es.as_deref(),
    };
    variant.or(result.synopsis.as_deref())
}

pub static EN: Translations = Translations {
    title: "MANGA",
    subtitle: "SCAN",
    footer: "// VISUAL SEARCH TERMINAL v2.0",

    upload_title: "Drop a manga panel here",
    upload_subtitle: "or click to browse (JPEG, PNG, WEBP, GIF — max 10 MB)",
    drop_active: "Release to scan",
    scanning: "SCANNING...",

    search: "SEARCH",
    crop_image: "CROP IMAGE",
    search_this_area: "SEARCH THIS AREA",
    cancel: "CANCEL",
    confirm: "Confirm",

    search_again: "SEARCH AGAIN",
    unknown_title: "Unknown title",
    page: "Page",
    synopsis: "SYNOPSIS",
    no_synopsis: "No synopsis available.",
    author: "AUTHOR",
    related_works: "OTHER WORKS BY",

    details: "DETAILS",
    chapters: "CHAPTERS",
    status: "STATUS",
    published: "PUBLISHED",
    score: "SCORE",

    sources: "WHERE TO READ",
    official_sources: "Official",
    unofficial_sources: "Unofficial",

    not_what_you_looking_for: "NOT WHAT YOU WERE LOOKING FOR?",

    recent_searches: "RECENT SEARCHES",
    clear_history: "CLEAR",
    confirm_clear_title: "Clear history",
    confirm_clear_message: "This removes all recent searches from this browser. Continue?",

    no_match_title: "NO MATCH FOUND",
    no_match_message: "No confident match for this panel. Try cropping closer to the artwork.",

    error: "Something went wrong. Please try again.",
    invalid_file_type: "Unsupported file type. Use JPEG, PNG, WEBP or GIF.",
    file_too_large: "File is too large. Maximum size is 10 MB.",

    status_publishing: "Publishing",
    status_finished: "Finished",
    status_on_hiatus: "On Hiatus",
    status_discontinued: "Discontinued",
    status_not_yet_aired: "Not yet published",

    prequel: "Prequel",
    sequel: "Sequel",
    spin_off: "Spin-Off",
    side_story: "Side Story",
    parent_story: "Parent Story",
    alternative_setting: "Alternative Setting",
    alternative_version: "Alternative Version",
};

pub static ES: Translations = Translations {
    title: "MANGA",
    subtitle: "SCAN",
    footer: "// TERMINAL DE BÚSQUEDA VISUAL v2.0",

    upload_title: "Suelta aquí un panel de manga",
    upload_subtitle: "o haz clic para elegir (JPEG, PNG, WEBP, GIF — máx. 10 MB)",
    drop_active: "Suelta para escanear",
    scanning: "ESCANEANDO...",

    search: "BUSCAR",
    crop_image: "RECORTAR",
    search_this_area: "BUSCAR ESTA ZONA",
    cancel: "CANCELAR",
    confirm: "Confirmar",

    search_again: "BUSCAR OTRA VEZ",
    unknown_title: "Título desconocido",
    page: "Página",
    synopsis: "SINOPSIS",
    no_synopsis: "Sin sinopsis disponible.",
    author: "AUTOR",
    related_works: "OTRAS OBRAS DE",

    details: "DETALLES",
    chapters: "CAPÍTULOS",
    status: "ESTADO",
    published: "PUBLICADO",
    score: "PUNTUACIÓN",

    sources: "DÓNDE LEER",
    official_sources: "Oficiales",
    unofficial_sources: "No oficiales",

    not_what_you_looking_for: "¿NO ERA LO QUE BUSCABAS?",

    recent_searches: "BÚSQUEDAS RECIENTES",
    clear_history: "BORRAR",
    confirm_clear_title: "Borrar historial",
    confirm_clear_message: "Esto elimina todas las búsquedas recientes de este navegador. ¿Continuar?",

    no_match_title: "SIN COINCIDENCIAS",
    no_match_message: "No hay coincidencia fiable para este panel. Prueba a recortar más cerca del dibujo.",

    error: "Algo salió mal. Inténtalo de nuevo.",
    invalid_file_type: "Tipo de archivo no admitido. Usa JPEG, PNG, WEBP o GIF.",
    file_too_large: "El archivo es demasiado grande. El tamaño máximo es 10 MB.",

    status_publishing: "En publicación",
    status_finished: "Finalizado",
    status_on_hiatus: "En pausa",
    status_discontinued: "Cancelado",
    status_not_yet_aired: "Aún no publicado",

    prequel: "Precuela",
    sequel: "Secuela",
    spin_off: "Spin-Off",
    side_story: "Historia paralela",
    parent_story: "Historia principal",
    alternative_setting: "Ambientación alternativa",
    alternative_version: "Versión alternativa",
};
