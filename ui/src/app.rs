use crate::content::{
    InfoCard, SocialKind, SocialLink, AI_STEPS, BENEFITS_CHART_ID, BRAND, CAMPUS_URL,
    CHALLENGES, CHALLENGE_SECTION, ET_COMPONENTS, ET_FACTORS, ET_SECTION, FUTURE_SECTION,
    HERO_IMAGE, HERO_SECTION, LEGACY_SECTION, NAV_LINKS, PRODUCTION_CHART_ID, PROTOTYPE_SECTION,
    SOCIAL_LINKS, SOLIDARITY_SHARES, SOLUTION_SECTION, STAT_COUNTERS, TECH_COMPONENTS,
    WATER_CYCLE_IMAGE,
};
use crate::state::{mobile_menu_class, provide_menu_ctx, use_menu_ctx};
use crate::theme::GLOBAL_CSS;
use leptos::*;
use leptos_meta::*;

#[cfg(target_arch = "wasm32")]
use crate::activator::{activator_config, Activator, ActivatorTargets};
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_menu_ctx();

    let production_ref = create_node_ref::<html::Canvas>();
    let benefits_ref = create_node_ref::<html::Canvas>();

    #[cfg(target_arch = "wasm32")]
    {
        let activator: Rc<RefCell<Option<Activator>>> = Rc::new(RefCell::new(None));
        let disposed = Rc::new(Cell::new(false));

        {
            let activator = activator.clone();
            let disposed = disposed.clone();
            spawn_local(async move {
                // Counters are looked up in the document, so wait for mount.
                TimeoutFuture::new(0).await;
                if disposed.get() {
                    return;
                }
                let targets = ActivatorTargets {
                    production: production_ref.get_untracked().map(|el| (*el).clone()),
                    benefits: benefits_ref.get_untracked().map(|el| (*el).clone()),
                };
                match Activator::install(activator_config(), targets) {
                    Ok(a) => *activator.borrow_mut() = Some(a),
                    Err(err) => tracing::warn!(%err, "scroll animations disabled"),
                }
            });
        }

        on_cleanup(move || {
            disposed.set(true);
            if let Some(a) = activator.borrow_mut().take() {
                a.teardown();
            }
        });
    }

    view! {
        <Title text="Hortas Inteligentes de Birigui"/>
        <Style>{GLOBAL_CSS}</Style>
        <div class="site">
            <Header/>
            <main>
                <Hero/>
                <LegacySection chart_ref=production_ref/>
                <ChallengeSection/>
                <SolutionSection/>
                <EvapotranspirationSection/>
                <FutureSection chart_ref=benefits_ref/>
                <PrototypeSection/>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let menu = use_menu_ctx();

    view! {
        <header class="site-header">
            <nav class="container site-nav">
                <a href="#" class="brand">{BRAND}</a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|l| view! { <a href=l.href() class="nav-link">{l.label}</a> })
                        .collect_view()}
                </div>
                <button
                    id="mobile-menu-button"
                    class="menu-button"
                    aria-label="Menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu.open.get().to_string()
                    on:click=move |_| menu.toggle()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-4 6h4"/>
                    </svg>
                </button>
            </nav>
            <div id="mobile-menu" class=move || mobile_menu_class(menu.open.get())>
                {NAV_LINKS
                    .iter()
                    .map(|l| {
                        view! {
                            <a href=l.href() class="mobile-link" on:click=move |_| menu.close()>
                                {l.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let background = format!(
        "background-image: linear-gradient(rgba(0,0,0,0.3), rgba(0,0,0,0.3)), url('{HERO_IMAGE}')"
    );
    view! {
        <section id=HERO_SECTION class="hero" style=background>
            <div class="container">
                <h1 class="text-shadow">"Irrigação Inteligente para as Hortas de Birigui"</h1>
                <p class="text-shadow">
                    "Transformando a agricultura comunitária com tecnologia, sustentabilidade e inovação."
                </p>
                <a href=format!("#{LEGACY_SECTION}") class="button button-primary">"Explore o Projeto"</a>
            </div>
        </section>
    }
}

#[component]
fn SectionHead(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class="section-head">
            <h2 class="section-title">{title}</h2>
            <p class="section-lead">{lead}</p>
        </div>
    }
}

#[component]
fn Checklist(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="checklist">
            {items
                .iter()
                .map(|item| view! { <li><span class="check">"✔"</span>{*item}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn LegacySection(chart_ref: NodeRef<html::Canvas>) -> impl IntoView {
    view! {
        <section id=LEGACY_SECTION class="section section-sand">
            <div class="container">
                <SectionHead
                    title="Um Legado de 40 Anos"
                    lead="Desde a década de 1980, as hortas comunitárias transformam Birigui, convertendo terrenos ociosos em fontes de alimento, renda e coesão social. Hoje, o projeto é um modelo para o Brasil, combinando segurança alimentar com sustentabilidade."
                />
                <div class="grid grid-3 stats text-center">
                    {STAT_COUNTERS
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="card">
                                    <span class="stat-value" data-counter=c.target.to_string()>
                                        {c.initial}
                                    </span>
                                    <p class="stat-caption">{c.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-5 align-center">
                    <div class="span-3">
                        <h3 class="subheading">"Modelo de Economia Solidária"</h3>
                        <p>
                            "A produção das hortas é dividida de forma a beneficiar toda a comunidade. Uma lei municipal regulamentou um modelo de economia solidária que garante o sustento dos produtores, apoia entidades assistenciais e assegura o consumo próprio das famílias."
                        </p>
                        <Checklist items=&SOLIDARITY_SHARES/>
                    </div>
                    <div class="span-2">
                        <div class="chart-container">
                            <canvas id=PRODUCTION_CHART_ID node_ref=chart_ref></canvas>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn info_card(card: &InfoCard) -> impl IntoView {
    view! {
        <div class="card text-center">
            <div class="card-icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

#[component]
fn ChallengeSection() -> impl IntoView {
    view! {
        <section id=CHALLENGE_SECTION class="section">
            <div class="container">
                <SectionHead
                    title="O Desafio da Irrigação Manual"
                    lead="Apesar do sucesso, o cuidado com as 63 hortas ainda depende de um processo manual e diário. Isso representa uma barreira para a eficiência, a escalabilidade e a inclusão de mais membros da comunidade."
                />
                <div class="grid grid-3">{CHALLENGES.iter().map(info_card).collect_view()}</div>
            </div>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section id=SOLUTION_SECTION class="section section-sand">
            <div class="container">
                <SectionHead
                    title="A Solução: Um Ecossistema Inteligente"
                    lead="Propomos um sistema de irrigação automatizado, sustentável e acessível, que integra componentes de hardware e software para otimizar o trabalho, economizar recursos e empoderar os produtores."
                />
                <div class="grid grid-4">
                    {TECH_COMPONENTS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="card tech-card text-center">
                                    <div class="tech-component">
                                        <div class="tech-icon">{t.icon}</div>
                                        <h3>{t.title}</h3>
                                        <p class="tech-detail">{t.body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EvapotranspirationSection() -> impl IntoView {
    view! {
        <section id=ET_SECTION class="section section-sand">
            <div class="container">
                <SectionHead
                    title="Evapotranspiração: A Base da Irrigação Inteligente Inicial"
                    lead="Enquanto coletamos dados suficientes para o treinamento de uma Inteligência Artificial avançada, o sistema de irrigação utilizará o cálculo da evapotranspiração para otimizar o uso da água desde o início. Este método garante uma irrigação eficiente e adaptada às necessidades das plantas."
                />
                <div class="grid grid-2 align-start">
                    <div>
                        <h3 class="subheading">"O Que é Evapotranspiração?"</h3>
                        <p>
                            "Evapotranspiração é a combinação da evaporação da água da superfície do solo e da transpiração da água pelas plantas. É um indicador chave de quanta água uma planta \"perde\" para a atmosfera e, portanto, de quanta água ela precisa para se manter saudável."
                        </p>
                        <Checklist items=&ET_COMPONENTS/>
                    </div>
                    <div>
                        <h3 class="subheading">"Como Calculamos?"</h3>
                        <p>
                            "Utilizamos dados de sensores (temperatura, umidade do ar, luminosidade) e informações climáticas para estimar a evapotranspiração de referência (ETo). Com base nesse cálculo e nas características da cultura, o sistema determinará a quantidade e o momento ideal para irrigar."
                        </p>
                        <h4>"Fatores Considerados no Cálculo:"</h4>
                        <ul class="bullets">
                            {ET_FACTORS.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="figure">
                    <img src=WATER_CYCLE_IMAGE alt="Ilustração de Evaporação"/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FutureSection(chart_ref: NodeRef<html::Canvas>) -> impl IntoView {
    view! {
        <section id=FUTURE_SECTION class="section">
            <div class="container">
                <SectionHead
                    title="O Futuro: A Inteligência Artificial Preditiva"
                    lead="Com a coleta contínua de dados e o aprimoramento do sistema, a próxima fase do projeto integrará a Inteligência Artificial. A IA aprenderá com os padrões históricos e as condições em tempo real para otimizar ainda mais a irrigação, tornando-a preditiva e adaptativa."
                />
                <div class="grid grid-5 align-center">
                    <div class="span-2">
                        <div class="chart-container">
                            <canvas id=BENEFITS_CHART_ID node_ref=chart_ref></canvas>
                        </div>
                    </div>
                    <div class="span-3">
                        <h3 class="subheading">"De Dados a Decisões Otimizadas com IA"</h3>
                        <p>
                            "A Inteligência Artificial irá além dos cálculos de evapotranspiração, utilizando algoritmos avançados para prever as necessidades hídricas futuras das plantas e ajustar a irrigação de forma proativa. Isso significa prever a necessidade de água antes mesmo que o solo fique seco, maximizando a eficiência."
                        </p>
                        <div class="steps">
                            {AI_STEPS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <div class="step">
                                            <h4>{s.title}</h4>
                                            <p>{s.body}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PrototypeSection() -> impl IntoView {
    view! {
        <section id=PROTOTYPE_SECTION class="section">
            <div class="container text-center">
                <h2 class="section-title">"IFSP Birigui: O Polo de Inovação"</h2>
                <p class="section-lead">
                    "O protótipo será desenvolvido e avaliado na horta do IFSP - Campus Birigui. A instituição servirá como um laboratório vivo, combinando sua expertise técnica com um ambiente de co-criação para garantir que a solução seja robusta, eficaz e pronta para ser apresentada à comunidade."
                </p>
                <div class="figure">
                    <a href=CAMPUS_URL target="_blank" rel="noopener noreferrer" class="button button-light">
                        "Conheça o Campus"
                    </a>
                </div>
            </div>
        </section>
    }
}

fn social_icon(kind: SocialKind) -> impl IntoView {
    match kind {
        SocialKind::Instagram => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
            </svg>
        }
        .into_view(),
        SocialKind::YouTube => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2A54.47 54.47 0 0 0 12 3c-4.99 0-9.66.42-10.6 1.42A2.78 2.78 0 0 0 1.46 6.42C1 8.52 1 12 1 12s0 3.48.46 5.58a2.78 2.78 0 0 0 1.94 2A54.47 54.47 0 0 0 12 21c4.99 0 9.66-.42 10.6-1.42a2.78 2.78 0 0 0 1.94-2C23 15.48 23 12 23 12s0-3.48-.46-5.58z"></path>
                <polygon points="10 8 16 12 10 16 10 8"></polygon>
            </svg>
        }
        .into_view(),
    }
}

fn social_link(link: &SocialLink) -> impl IntoView {
    view! {
        <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
            {social_icon(link.kind)}
        </a>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>"© 2025 Projeto de Irrigação Inteligente - Uma colaboração para o futuro de Birigui."</p>
                <p class="small">"Desenvolvido como uma iniciativa do IFSP - Campus Birigui."</p>
                <div class="social">{SOCIAL_LINKS.iter().map(social_link).collect_view()}</div>
            </div>
        </footer>
    }
}
