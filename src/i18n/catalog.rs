//! Static translation tables - one per supported language.
//!
//! Keys are dotted paths mirroring the page structure (`nav.*`, `hero.*`,
//! `projects.*`, `skills.*`, `contact.*`, `footer.*`). Lookup is a plain
//! match so missing keys cost nothing and the tables live in rodata.

use super::Language;

/// Look up a key in the given language's table.
pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::En => english(key),
        Language::Es => spanish(key),
        Language::Fr => french(key),
    }
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "Home",
        "nav.projects" => "Projects",
        "nav.skills" => "Skills",
        "nav.contact" => "Contact",

        "hero.name" => "Alex Chen",
        "hero.title" => "Frontend Developer & UI Enthusiast",
        "hero.subtitle" => "I craft fast, delightful interfaces for the web.",
        "hero.viewWork" => "View My Work",
        "hero.downloadResume" => "Download Resume",

        "projects.title" => "Featured Projects",
        "projects.subtitle" => "A selection of things I've designed and built.",
        "projects.filter.all" => "All",
        "projects.filter.react" => "React",
        "projects.filter.javascript" => "JavaScript",
        "projects.filter.css" => "CSS",
        "projects.project1.title" => "E-Commerce Storefront",
        "projects.project1.description" => {
            "A full-featured storefront with cart, checkout, and order tracking."
        }
        "projects.project2.title" => "Task Board",
        "projects.project2.description" => {
            "A drag-and-drop kanban board that persists entirely in the browser."
        }
        "projects.project3.title" => "Animated Landing Page",
        "projects.project3.description" => {
            "A scroll-driven marketing page with timeline-sequenced animations."
        }
        "projects.project4.title" => "Analytics Dashboard",
        "projects.project4.description" => {
            "Live charts over a streaming metrics API with configurable panels."
        }
        "projects.project5.title" => "Weather Companion",
        "projects.project5.description" => {
            "Location-aware forecasts with hourly and weekly breakdowns."
        }
        "projects.project6.title" => "3D Card Gallery",
        "projects.project6.description" => {
            "A pure-CSS gallery of perspective cards with flip transitions."
        }

        "skills.title" => "Skills & Expertise",
        "skills.subtitle" => "The tools and technologies I work with daily.",
        "skills.frontend.title" => "Frontend",
        "skills.styling.title" => "Styling & Design",
        "skills.tools.title" => "Tools & Workflow",
        "skills.techStack" => "Tech Stack",

        "contact.title" => "Get In Touch",
        "contact.subtitle" => "Have a project in mind? Let's talk about it.",
        "contact.form.name" => "Name",
        "contact.form.namePlaceholder" => "Your name",
        "contact.form.email" => "Email",
        "contact.form.emailPlaceholder" => "you@example.com",
        "contact.form.subject" => "Subject",
        "contact.form.subjectPlaceholder" => "What is this about?",
        "contact.form.message" => "Message",
        "contact.form.messagePlaceholder" => "Tell me about your project...",
        "contact.form.send" => "Send Message",
        "contact.form.sending" => "Sending...",
        "contact.info.email" => "Email",
        "contact.info.phone" => "Phone",
        "contact.info.location" => "Location",

        "footer.copyright" => "Designed & built by Alex Chen.",

        _ => return None,
    })
}

fn spanish(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "Inicio",
        "nav.projects" => "Proyectos",
        "nav.skills" => "Habilidades",
        "nav.contact" => "Contacto",

        "hero.name" => "Alex Chen",
        "hero.title" => "Desarrollador Frontend y entusiasta de UI",
        "hero.subtitle" => "Creo interfaces web rápidas y agradables.",
        "hero.viewWork" => "Ver mi trabajo",
        "hero.downloadResume" => "Descargar CV",

        "projects.title" => "Proyectos destacados",
        "projects.subtitle" => "Una selección de cosas que he diseñado y construido.",
        "projects.filter.all" => "Todos",
        "projects.filter.react" => "React",
        "projects.filter.javascript" => "JavaScript",
        "projects.filter.css" => "CSS",
        "projects.project1.title" => "Tienda en línea",
        "projects.project1.description" => {
            "Una tienda completa con carrito, pago y seguimiento de pedidos."
        }
        "projects.project2.title" => "Tablero de tareas",
        "projects.project2.description" => {
            "Un tablero kanban de arrastrar y soltar que persiste en el navegador."
        }
        "projects.project3.title" => "Página animada",
        "projects.project3.description" => {
            "Una página de marketing con animaciones secuenciadas al hacer scroll."
        }
        "projects.project4.title" => "Panel de analíticas",
        "projects.project4.description" => {
            "Gráficas en vivo sobre una API de métricas con paneles configurables."
        }
        "projects.project5.title" => "Compañero del clima",
        "projects.project5.description" => {
            "Pronósticos según tu ubicación con desglose por hora y semana."
        }
        "projects.project6.title" => "Galería de tarjetas 3D",
        "projects.project6.description" => {
            "Una galería en CSS puro de tarjetas con transiciones de giro."
        }

        "skills.title" => "Habilidades y experiencia",
        "skills.subtitle" => "Las herramientas y tecnologías que uso a diario.",
        "skills.frontend.title" => "Frontend",
        "skills.styling.title" => "Estilo y diseño",
        "skills.tools.title" => "Herramientas y flujo de trabajo",
        "skills.techStack" => "Tecnologías",

        "contact.title" => "Ponte en contacto",
        "contact.subtitle" => "¿Tienes un proyecto en mente? Hablemos.",
        "contact.form.name" => "Nombre",
        "contact.form.namePlaceholder" => "Tu nombre",
        "contact.form.email" => "Correo",
        "contact.form.emailPlaceholder" => "tu@ejemplo.com",
        "contact.form.subject" => "Asunto",
        "contact.form.subjectPlaceholder" => "¿De qué se trata?",
        "contact.form.message" => "Mensaje",
        "contact.form.messagePlaceholder" => "Cuéntame sobre tu proyecto...",
        "contact.form.send" => "Enviar mensaje",
        "contact.form.sending" => "Enviando...",
        "contact.info.email" => "Correo",
        "contact.info.phone" => "Teléfono",
        "contact.info.location" => "Ubicación",

        "footer.copyright" => "Diseñado y construido por Alex Chen.",

        _ => return None,
    })
}

fn french(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "Accueil",
        "nav.projects" => "Projets",
        "nav.skills" => "Compétences",
        "nav.contact" => "Contact",

        "hero.name" => "Alex Chen",
        "hero.title" => "Développeur frontend et passionné d'UI",
        "hero.subtitle" => "Je conçois des interfaces web rapides et agréables.",
        "hero.viewWork" => "Voir mon travail",
        "hero.downloadResume" => "Télécharger le CV",

        "projects.title" => "Projets phares",
        "projects.subtitle" => "Une sélection de choses que j'ai conçues et construites.",
        "projects.filter.all" => "Tous",
        "projects.filter.react" => "React",
        "projects.filter.javascript" => "JavaScript",
        "projects.filter.css" => "CSS",
        "projects.project1.title" => "Boutique en ligne",
        "projects.project1.description" => {
            "Une boutique complète avec panier, paiement et suivi des commandes."
        }
        "projects.project2.title" => "Tableau de tâches",
        "projects.project2.description" => {
            "Un tableau kanban en glisser-déposer qui persiste dans le navigateur."
        }
        "projects.project3.title" => "Page d'atterrissage animée",
        "projects.project3.description" => {
            "Une page marketing aux animations séquencées par le défilement."
        }
        "projects.project4.title" => "Tableau de bord analytique",
        "projects.project4.description" => {
            "Graphiques en direct sur une API de métriques, panneaux configurables."
        }
        "projects.project5.title" => "Compagnon météo",
        "projects.project5.description" => {
            "Prévisions géolocalisées avec détail horaire et hebdomadaire."
        }
        "projects.project6.title" => "Galerie de cartes 3D",
        "projects.project6.description" => {
            "Une galerie en CSS pur de cartes en perspective avec retournement."
        }

        "skills.title" => "Compétences et expertise",
        "skills.subtitle" => "Les outils et technologies que j'utilise au quotidien.",
        "skills.frontend.title" => "Frontend",
        "skills.styling.title" => "Style et design",
        "skills.tools.title" => "Outils et méthodes",
        "skills.techStack" => "Technologies",

        "contact.title" => "Me contacter",
        "contact.subtitle" => "Un projet en tête ? Parlons-en.",
        "contact.form.name" => "Nom",
        "contact.form.namePlaceholder" => "Votre nom",
        "contact.form.email" => "E-mail",
        "contact.form.emailPlaceholder" => "vous@exemple.com",
        "contact.form.subject" => "Objet",
        "contact.form.subjectPlaceholder" => "De quoi s'agit-il ?",
        "contact.form.message" => "Message",
        "contact.form.messagePlaceholder" => "Parlez-moi de votre projet...",
        "contact.form.send" => "Envoyer le message",
        "contact.form.sending" => "Envoi...",
        "contact.info.email" => "E-mail",
        "contact.info.phone" => "Téléphone",
        "contact.info.location" => "Localisation",

        "footer.copyright" => "Conçu et réalisé par Alex Chen.",

        _ => return None,
    })
}
