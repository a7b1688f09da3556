//! Global CSS styles for the Driftwood reader.
//!
//! Quiet paper-and-ink reading aesthetic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf7f0;
  --paper-shade: #f1ece1;
  --paper-border: #ddd5c4;

  /* INK (Text) */
  --ink: #2b2a26;
  --ink-soft: rgba(43, 42, 38, 0.72);
  --ink-faint: rgba(43, 42, 38, 0.5);

  /* TIDE (Links, Interactive) */
  --tide: #1f6f6b;
  --tide-glow: rgba(31, 111, 107, 0.25);

  /* EMBER (Accents, Headings) */
  --ember: #b0562f;
  --ember-glow: rgba(176, 86, 47, 0.2);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

/* === Home Page === */
.home {
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.home-header {
  text-align: center;
  margin-bottom: 3rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  color: var(--ember);
  letter-spacing: 0.02em;
}

.tagline {
  margin-top: 0.5rem;
  font-size: var(--text-lg);
  color: var(--ink-soft);
  font-style: italic;
}

/* === Featured Content Section === */
.featured-content {
  margin-top: 2rem;
}

.featured-content__heading {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--ink);
  border-bottom: 1px solid var(--paper-border);
  padding-bottom: 0.75rem;
  margin-bottom: 1.5rem;
}

/* === Cards Grid === */
.cards-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.cards-grid--featured {
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}

/* === Card === */
.card {
  background: var(--paper-shade);
  border: 1px solid var(--paper-border);
  border-radius: 8px;
  overflow: hidden;
  transition: box-shadow var(--transition-normal),
              transform var(--transition-fast);
}

.card:hover {
  box-shadow: 0 4px 16px var(--tide-glow);
  transform: translateY(-2px);
}

.card__link {
  display: block;
  height: 100%;
  color: inherit;
  text-decoration: none;
}

.card__link:focus-visible {
  outline: 2px solid var(--tide);
  outline-offset: 2px;
}

.card__image-container {
  aspect-ratio: 1.618 / 1;
  overflow: hidden;
  background: var(--paper-border);
}

.card__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card--with-image .card__content {
  border-top: 1px solid var(--paper-border);
}

.card__content {
  padding: 1.25rem;
}

.card__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--ember);
  margin-bottom: 0.5rem;
}

.card__description {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}
"#;
