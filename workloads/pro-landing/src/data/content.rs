//! Copy for every section of the landing page.

use serde::{Deserialize, Serialize};

/// Anchor of the registration section.
pub const REGISTRATION_ANCHOR: &str = "registro";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerContent {
    pub label: String,
    pub cta_text: String,
}

impl Default for BannerContent {
    fn default() -> Self {
        Self {
            label: "Lanzamiento PRO Manizales:".to_string(),
            cta_text: "¡Reserva tu lugar ahora!".to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub note: String,
    pub logo: String,
    pub video: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Vive el Deporte Aficionado como un profesional".to_string(),
            subheadline: "La app para conectar, organizar, medir tu rendimiento y elevar tu pasión por el deporte aquí, en nuestra ciudad.".to_string(),
            cta_text: "¡Regístrate Gratis!".to_string(),
            note: "Acceso anticipado exclusivo para la comunidad deportiva de Manizales.".to_string(),
            logo: "/assets/LOGO.png".to_string(),
            video: "/assets/hero-3.mp4".to_string(),
        }
    }
}

/// A feature card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Features section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub features: Vec<Feature>,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        Self {
            section_title: "Todo lo que Necesitas para Brillar en Manizales".to_string(),
            section_subtitle: "PRO está diseñado para potenciar tu experiencia deportiva con herramientas que realmente necesitas.".to_string(),
            features: vec![
                Feature::new(
                    "📈",
                    "Mide tu Rendimiento como un PRO",
                    "Registra y analiza tus estadísticas clave en Fútbol, Ciclismo, Running (¡y pronto más!). Identifica mejoras y alcanza tus metas.",
                ),
                Feature::new(
                    "👥",
                    "Conecta con Tu Comunidad Deportiva Local",
                    "Encuentra jugadores, equipos y grupos con tus mismos intereses aquí en Manizales. ¡Amplía tu red deportiva!",
                ),
                Feature::new(
                    "📅",
                    "Organiza Partidos y Entrenos Fácilmente",
                    "Coordina horarios, confirma asistencia y mantén a tu equipo o grupo informado sin complicaciones.",
                ),
                Feature::new(
                    "📍",
                    "Descubre Dónde Jugar en Manizales",
                    "Accede a un directorio de canchas y escenarios deportivos locales. Consulta disponibilidad, info y reseñas (¡pronto reservas!).",
                ),
                Feature::new(
                    "🏆",
                    "Motívate con Retos y Gamificación",
                    "Participa en desafíos, compite en tablas de clasificación locales y gana insignias por tus logros deportivos.",
                ),
                Feature::new(
                    "📖",
                    "Recursos para Mejorar [Próximamente]",
                    "Accede a planes de entrenamiento, consejos y conecta con expertos para llevar tu juego al siguiente nivel.",
                ),
            ],
        }
    }
}

/// An icon with a one-line caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl Highlight {
    pub fn new(icon: &str, title: &str, text: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// A titled section with body copy, a background picture and highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContent {
    pub title: String,
    pub body: String,
    pub image: String,
    pub image_alt: String,
    pub highlights: Vec<Highlight>,
}

impl StoryContent {
    /// "The problem" section.
    pub fn challenge() -> Self {
        Self {
            title: "Tu Pasión Merece Más, ¿Verdad?".to_string(),
            body: "En Manizales amamos el deporte, pero organizar partidos, encontrar gente para jugar, saber dónde entrenar y medir tu progreso como los profesionales puede ser un reto. Te falta la herramienta que centralice tu vida deportiva.".to_string(),
            image: "/assets/male-soccer-player-with-ball-grass-field.jpg".to_string(),
            image_alt: "Jugador de fútbol en Manizales".to_string(),
            highlights: vec![
                Highlight::new("📅", "", "Coordinar horarios y confirmar asistencia se vuelve una pesadilla"),
                Highlight::new("📉", "", "Sin forma de medir tu evolución, es difícil mejorar tus habilidades"),
                Highlight::new("🗺️", "", "Encontrar los mejores escenarios deportivos en Manizales requiere tiempo"),
            ],
        }
    }

    /// "What we built" section.
    pub fn solution() -> Self {
        Self {
            title: "La Solución que Necesitas".to_string(),
            body: "PRO Manizales es la plataforma que centraliza tu vida deportiva. Con nuestra app, podrás organizar partidos, encontrar jugadores, reservar escenarios y medir tu progreso como los profesionales.".to_string(),
            image: "/assets/sportsman-sitting-grass-holding-football-dusk.jpg".to_string(),
            image_alt: "Deportista en Manizales al atardecer".to_string(),
            highlights: vec![
                Highlight::new("⚽", "Organiza Partidos", "Crea y gestiona partidos con facilidad"),
                Highlight::new("🤝", "Encuentra Jugadores", "Conecta con otros deportistas"),
                Highlight::new("📊", "Mide tu Progreso", "Sigue tu evolución deportiva"),
            ],
        }
    }
}

/// Local-focus section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalFocusContent {
    pub title: String,
    pub body: String,
    pub images: Vec<String>,
    pub map_embed: String,
    pub map_labels: Vec<String>,
}

impl Default for LocalFocusContent {
    fn default() -> Self {
        Self {
            title: "Pensado para deportistas apasionados".to_string(),
            body: "PRO nace del corazón y la pasión por el deporte en nuestra ciudad. Creemos que cada gota de sudor, cada minuto de entrenamiento y cada sueño deportivo merece brillar. Estamos aquí para conectar almas apasionadas, celebrar victorias personales y construir una comunidad donde el espíritu deportivo trascienda más allá de las canchas. ¡Porque tu pasión deportiva merece una plataforma a su altura!".to_string(),
            images: vec!["/assets/img-1.png".to_string(), "/assets/img-3.jpeg".to_string()],
            map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3974.288150474109!2d-75.49168783772532!3d5.056967311029084!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8e47657c8b8223b9%3A0x6b14d6b82cf52c2a!2sEstadio%20Palogrande!5e0!3m2!1ses!2sco!4v1743211158315!5m2!1ses!2sco".to_string(),
            map_labels: vec!["Estadio".to_string(), "Baloncesto".to_string()],
        }
    }
}

/// Registration section copy and field labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationContent {
    pub heading: String,
    pub pitch: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub sport_label: String,
    pub sport_placeholder: String,
    pub optional_hint: String,
    pub terms_label: String,
    pub invite_note: String,
    pub success_body: String,
}

impl Default for RegistrationContent {
    fn default() -> Self {
        Self {
            heading: "¿ Listo para Ser Parte de la Revolución Deportiva en Manizales ?".to_string(),
            pitch: "Únete AHORA a la lista de espera de PRO Manizales. Serás el primero en saber cuándo lanzamos, tendrás acceso anticipado y beneficios exclusivos por ser fundador. ¡No te quedes por fuera!".to_string(),
            email_label: "Tu Correo Electrónico".to_string(),
            email_placeholder: "tucorreo@ejemplo.com".to_string(),
            name_label: "Tu Nombre".to_string(),
            name_placeholder: "Tu nombre".to_string(),
            sport_label: "Tu Deporte Principal".to_string(),
            sport_placeholder: "Selecciona un deporte".to_string(),
            optional_hint: "(Opcional)".to_string(),
            terms_label: "Acepto recibir comunicaciones sobre PRO.".to_string(),
            invite_note: "Invita a tus amigos y compañeros de equipo. ¡Mientras más seamos, mejor será la comunidad PRO en Manizales!".to_string(),
            success_body: "Ya estás en la lista para PRO Manizales. Te avisaremos pronto.".to_string(),
        }
    }
}

/// A footer language option. Selecting one changes nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub label: String,
}

/// Footer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub brand: String,
    pub tagline: String,
    pub signature: String,
    pub languages: Vec<Language>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "PRO Manizales".to_string(),
            tagline: "Pasión deportiva local.".to_string(),
            signature: "Diseñado con ♥ para la comunidad deportiva de Manizales".to_string(),
            languages: vec![
                Language {
                    code: "es".to_string(),
                    label: "Español".to_string(),
                },
                Language {
                    code: "en".to_string(),
                    label: "English".to_string(),
                },
            ],
        }
    }
}

impl FooterContent {
    /// Copyright line for `year`.
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. {}", year, self.brand, self.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_features() {
        let content = FeaturesContent::default();
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.features[0].title, "Mide tu Rendimiento como un PRO");
    }

    #[test]
    fn test_story_sections() {
        assert_eq!(StoryContent::challenge().highlights.len(), 3);
        assert_eq!(StoryContent::solution().title, "La Solución que Necesitas");
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            FooterContent::default().copyright(2025),
            "© 2025 PRO Manizales. Pasión deportiva local."
        );
    }

    #[test]
    fn test_default_language_first() {
        assert_eq!(FooterContent::default().languages[0].code, "es");
    }
}
