/// UI language, chosen once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Language name as spelled out in prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Spanish",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }
}

pub struct Strings {
    pub app_title: &'static str,
    pub tagline: &'static str,
    pub pick_platform: &'static str,
    pub idea_placeholder: &'static str,
    pub upload_video: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,
    pub new_analysis: &'static str,
    pub copy_caption: &'static str,
    pub copied: &'static str,
    pub generate_script: &'static str,
    pub hide_script: &'static str,
    pub regenerate_script: &'static str,
    pub script_loading: &'static str,
    pub no_scenes: &'static str,
    pub error_generic: &'static str,
    pub error_no_platform: &'static str,
    pub error_empty_idea: &'static str,
    pub error_busy: &'static str,
    pub credits_label: &'static str,
    pub unlimited: &'static str,
    pub get_credits: &'static str,
    pub pricing_title: &'static str,
    pub pricing_subtitle: &'static str,
    pub popular: &'static str,
    pub buy: &'static str,
    pub processing: &'static str,
    pub purchase_success: &'static str,
    pub close: &'static str,
}

static EN: Strings = Strings {
    app_title: "Viralens",
    tagline: "Know if it will travel before you post it",
    pick_platform: "Pick a platform",
    idea_placeholder: "Describe your content idea...",
    upload_video: "Upload a video",
    analyze: "Run the audit",
    analyzing: "Auditing your content...",
    new_analysis: "New analysis",
    copy_caption: "Copy caption",
    copied: "Copied!",
    generate_script: "Generate scene script",
    hide_script: "Hide script",
    regenerate_script: "Regenerate script",
    script_loading: "Writing your scene script...",
    no_scenes: "No valid scenes came back. Try regenerating.",
    error_generic: "The analysis is unavailable right now. Please try again.",
    error_no_platform: "Pick a platform first.",
    error_empty_idea: "Type an idea or choose a video first.",
    error_busy: "An analysis is already running.",
    credits_label: "credits",
    unlimited: "unlimited",
    get_credits: "Get credits",
    pricing_title: "You are out of credits",
    pricing_subtitle: "Top up to keep auditing",
    popular: "Most popular",
    buy: "Buy",
    processing: "Processing...",
    purchase_success: "Credits added to your balance!",
    close: "Close",
};

static ES: Strings = Strings {
    app_title: "Viralens",
    tagline: "Sabe si va a viajar antes de publicarlo",
    pick_platform: "Elige una plataforma",
    idea_placeholder: "Describe tu idea de contenido...",
    upload_video: "Sube un video",
    analyze: "Ejecutar el audit",
    analyzing: "Auditando tu contenido...",
    new_analysis: "Nuevo análisis",
    copy_caption: "Copiar caption",
    copied: "¡Copiado!",
    generate_script: "Generar guion de escenas",
    hide_script: "Ocultar guion",
    regenerate_script: "Regenerar guion",
    script_loading: "Escribiendo tu guion de escenas...",
    no_scenes: "No llegaron escenas válidas. Intenta regenerar.",
    error_generic: "El análisis no está disponible ahora. Inténtalo de nuevo.",
    error_no_platform: "Primero elige una plataforma.",
    error_empty_idea: "Escribe una idea o elige un video primero.",
    error_busy: "Ya hay un análisis en curso.",
    credits_label: "créditos",
    unlimited: "ilimitado",
    get_credits: "Obtener créditos",
    pricing_title: "Te quedaste sin créditos",
    pricing_subtitle: "Recarga para seguir auditando",
    popular: "Más popular",
    buy: "Comprar",
    processing: "Procesando...",
    purchase_success: "¡Créditos añadidos a tu saldo!",
    close: "Cerrar",
};

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::Es => &ES,
    }
}
