//! Page copy. Everything here is static and rendered as-is.

pub const BRAND: &str = "Hortas Inteligentes";
pub const PRODUCTION_CHART_ID: &str = "producaoChart";
pub const BENEFITS_CHART_ID: &str = "beneficiosChart";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1515150144380-bca9f1650ed9?q=80&w=2880&auto=format&fit=crop";
pub const WATER_CYCLE_IMAGE: &str =
    "https://s1.static.brasilescola.uol.com.br/be/2021/05/ciclo-da-agua.jpg";
pub const CAMPUS_URL: &str = "https://bri.ifsp.edu.br/";

pub const HERO_SECTION: &str = "hero";
pub const LEGACY_SECTION: &str = "legado";
pub const CHALLENGE_SECTION: &str = "desafio";
pub const SOLUTION_SECTION: &str = "solucao";
pub const ET_SECTION: &str = "evapotranspiracao";
pub const FUTURE_SECTION: &str = "futuro";
pub const PROTOTYPE_SECTION: &str = "ifsp";

/// Section anchors in page order. The page renders exactly these ids.
pub const SECTION_IDS: [&str; 7] = [
    HERO_SECTION,
    LEGACY_SECTION,
    CHALLENGE_SECTION,
    SOLUTION_SECTION,
    ET_SECTION,
    FUTURE_SECTION,
    PROTOTYPE_SECTION,
];

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { section: LEGACY_SECTION, label: "O Legado" },
    NavLink { section: CHALLENGE_SECTION, label: "O Desafio" },
    NavLink { section: SOLUTION_SECTION, label: "A Solução" },
    NavLink { section: ET_SECTION, label: "Evapotranspiração" },
    NavLink { section: FUTURE_SECTION, label: "O Futuro (IA)" },
    NavLink { section: PROTOTYPE_SECTION, label: "O Protótipo" },
];

/// Animated statistic. `initial` is what shows before the counter fires.
#[derive(Debug, Clone, Copy)]
pub struct StatCounter {
    pub target: i64,
    pub initial: &'static str,
    pub caption: &'static str,
}

pub const STAT_COUNTERS: [StatCounter; 3] = [
    StatCounter { target: 63, initial: "0", caption: "Hortas Comunitárias" },
    StatCounter { target: 2000, initial: "500", caption: "Famílias Beneficiadas" },
    StatCounter { target: 100, initial: "0", caption: "% Orgânico" },
];

pub const SOLIDARITY_SHARES: [&str; 3] = [
    "1/3 para geração de renda",
    "1/3 para doação a entidades",
    "1/3 para consumo próprio",
];

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const CHALLENGES: [InfoCard; 3] = [
    InfoCard {
        icon: "🚶‍♂️",
        title: "Deslocamento Diário",
        body: "Produtores precisam ir até a horta todos os dias apenas para irrigar, consumindo tempo e recursos.",
    },
    InfoCard {
        icon: "💧",
        title: "Uso Ineficiente da Água",
        body: "A irrigação manual pode levar ao desperdício de água, sem um controle preciso da umidade do solo.",
    },
    InfoCard {
        icon: "🏋️",
        title: "Esforço Físico",
        body: "O trabalho manual contínuo pode ser uma barreira para idosos e pessoas com mobilidade reduzida.",
    },
];

pub const TECH_COMPONENTS: [InfoCard; 4] = [
    InfoCard {
        icon: "☀️",
        title: "Energia Solar Autônoma",
        body: "O sistema é 100% alimentado por painéis solares, eliminando custos com energia elétrica e garantindo operação sustentável e independente da rede.",
    },
    InfoCard {
        icon: "🌡️",
        title: "Sensores e ESP32",
        body: "Microcontroladores ESP32 com sensores de temperatura, umidade do ar, luminosidade e vento capturam dados climáticos precisos para decisões inteligentes de irrigação.",
    },
    InfoCard {
        icon: "📱",
        title: "App Mobile (React Native)",
        body: "Um aplicativo móvel em React Native permitirá o monitoramento e controle remoto do sistema pelos usuários, oferecendo flexibilidade total.",
    },
    InfoCard {
        icon: "🗄️",
        title: "Banco de Dados (Firebase/Supabase)",
        body: "Os dados capturados serão armazenados em um backend robusto como Firebase ou Supabase, garantindo segurança e acesso em tempo real.",
    },
];

pub const ET_COMPONENTS: [&str; 3] = [
    "Evaporação: Perda de água do solo e superfícies vegetais para a atmosfera.",
    "Transpiração: Liberação de vapor d'água pelas plantas através de suas folhas.",
    "Necessidade Hídrica: A evapotranspiração reflete a demanda real de água das culturas.",
];

pub const ET_FACTORS: [&str; 4] = [
    "Temperatura do Ar: Afeta a taxa de evaporação.",
    "Umidade do Ar: Influencia a capacidade do ar de absorver mais vapor d'água.",
    "Radiação Solar: Principal fonte de energia para a evaporação e transpiração.",
    "Velocidade do Vento: Ajuda a remover o vapor d'água da superfície das plantas e do solo.",
];

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const AI_STEPS: [Step; 4] = [
    Step {
        title: "1. Coleta Contínua de Dados",
        body: "Sensores na horta e dados de clima alimentam o sistema.",
    },
    Step {
        title: "2. Análise Preditiva com IA",
        body: "Algoritmos de Machine Learning analisam os dados para encontrar padrões e prever necessidades.",
    },
    Step {
        title: "3. Recomendações Precisas e Autônomas",
        body: "A IA sugere ou executa o momento e a quantidade exata de água para máxima eficiência.",
    },
    Step {
        title: "4. Irrigação Otimizada e Adaptativa",
        body: "O sistema executa a irrigação de forma autônoma, economizando recursos e aumentando a produtividade, adaptando-se em tempo real.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    YouTube,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        kind: SocialKind::Instagram,
        href: "https://www.instagram.com/ifspbirigui",
        label: "Instagram",
    },
    SocialLink {
        kind: SocialKind::YouTube,
        href: "https://www.youtube.com/channel/UCy79j-3UoJ4EwYJ3I3p9k9A",
        label: "YouTube",
    },
];
