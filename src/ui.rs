use crate::log::ActivityLog;

pub fn render_index(log: &ActivityLog) -> String {
    let stats = log.derived_stats();
    INDEX_HTML
        .replace("{{TOTAL}}", &stats.total_points.to_string())
        .replace("{{COUNT}}", &stats.count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Eco Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7ee;
      --bg-2: #cdeccd;
      --ink: #1f2d22;
      --accent: #2f9e44;
      --accent-2: #1d5d33;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(29, 93, 51, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f4e1 60%, #f2f9ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #55675b;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(29, 93, 51, 0.1);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7c8b80;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.points {
      color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
    }

    .btn-open {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 158, 68, 0.3);
    }

    .btn-confirm {
      background: var(--accent-2);
      color: white;
    }

    .btn-cancel {
      background: rgba(29, 93, 51, 0.08);
      color: var(--accent-2);
    }

    .form-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(29, 93, 51, 0.1);
      display: grid;
      gap: 16px;
    }

    .form-card[hidden] {
      display: none;
    }

    .catalog {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
      gap: 10px;
    }

    .template {
      background: rgba(29, 93, 51, 0.05);
      border-radius: 14px;
      padding: 12px;
      text-align: left;
      display: grid;
      gap: 4px;
      font-weight: 500;
      color: var(--ink);
    }

    .template .pts {
      font-size: 0.85rem;
      color: var(--accent-2);
    }

    .template.selected {
      background: var(--accent);
      color: white;
    }

    .template.selected .pts {
      color: rgba(255, 255, 255, 0.85);
    }

    .form-actions {
      display: flex;
      gap: 10px;
      justify-content: flex-end;
    }

    .entries {
      display: grid;
      gap: 10px;
    }

    .entry {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(29, 93, 51, 0.1);
      display: flex;
      align-items: center;
      gap: 14px;
    }

    .entry .icon {
      font-size: 1.6rem;
    }

    .entry .info {
      flex: 1;
      display: grid;
      gap: 2px;
    }

    .entry .name {
      font-weight: 600;
    }

    .entry .when {
      font-size: 0.85rem;
      color: #7c8b80;
    }

    .entry .pts {
      font-weight: 600;
      color: var(--accent);
      white-space: nowrap;
    }

    .entry .btn-remove {
      background: transparent;
      color: var(--danger);
      padding: 8px;
      font-size: 1.1rem;
    }

    .empty {
      text-align: center;
      color: #7c8b80;
      padding: 24px 0;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>&#127807; Eco Tracker</h1>
      <p class="subtitle">Log your eco-friendly wins and watch the points grow.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Total points</span>
        <span id="total" class="value points">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Activities logged</span>
        <span id="count" class="value">{{COUNT}}</span>
      </div>
    </section>

    <button class="btn-open" id="open-btn" type="button">&#43; Log an activity</button>

    <section class="form-card" id="form-card" hidden>
      <div class="catalog" id="catalog"></div>
      <div class="form-actions">
        <button class="btn-cancel" id="cancel-btn" type="button">Cancel</button>
        <button class="btn-confirm" id="confirm-btn" type="button" disabled>Add activity</button>
      </div>
    </section>

    <section class="entries" id="entries"></section>
  </main>

  <script>
    const totalEl = document.getElementById('total');
    const countEl = document.getElementById('count');
    const openBtn = document.getElementById('open-btn');
    const formCard = document.getElementById('form-card');
    const catalogEl = document.getElementById('catalog');
    const confirmBtn = document.getElementById('confirm-btn');
    const cancelBtn = document.getElementById('cancel-btn');
    const entriesEl = document.getElementById('entries');

    let catalog = [];

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body ? JSON.stringify(body) : '{}'
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const renderCatalog = (selected) => {
      catalogEl.innerHTML = '';
      catalog.forEach((template) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'template' + (template.name === selected ? ' selected' : '');
        const title = document.createElement('span');
        title.textContent = `${template.icon} ${template.name}`;
        const pts = document.createElement('span');
        pts.className = 'pts';
        pts.textContent = `+${template.points} pts`;
        button.append(title, pts);
        button.addEventListener('click', () => {
          post('/api/select', { name: template.name }).then(render);
        });
        catalogEl.appendChild(button);
      });
    };

    const renderEntries = (entries) => {
      entriesEl.innerHTML = '';
      if (!entries.length) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = 'Nothing logged yet. Start small!';
        entriesEl.appendChild(empty);
        return;
      }
      entries.forEach((entry) => {
        const row = document.createElement('div');
        row.className = 'entry';

        const icon = document.createElement('span');
        icon.className = 'icon';
        icon.textContent = entry.icon;

        const info = document.createElement('div');
        info.className = 'info';
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = entry.name;
        const when = document.createElement('span');
        when.className = 'when';
        when.textContent = `${entry.date} at ${entry.time}`;
        info.append(name, when);

        const pts = document.createElement('span');
        pts.className = 'pts';
        pts.textContent = `+${entry.points}`;

        const removeBtn = document.createElement('button');
        removeBtn.type = 'button';
        removeBtn.className = 'btn-remove';
        removeBtn.setAttribute('aria-label', `Remove ${entry.name}`);
        removeBtn.textContent = '\u{1f5d1}\u{fe0f}';
        removeBtn.addEventListener('click', () => {
          post('/api/remove', { id: entry.id }).then(render);
        });

        row.append(icon, info, pts, removeBtn);
        entriesEl.appendChild(row);
      });
    };

    const render = (data) => {
      totalEl.textContent = data.total_points;
      countEl.textContent = data.count;
      formCard.hidden = !data.form_open;
      openBtn.hidden = data.form_open;
      confirmBtn.disabled = !data.selected;
      renderCatalog(data.selected);
      renderEntries(data.entries);
    };

    openBtn.addEventListener('click', () => {
      post('/api/form', { action: 'open' }).then(render);
    });

    cancelBtn.addEventListener('click', () => {
      post('/api/form', { action: 'close' }).then(render);
    });

    confirmBtn.addEventListener('click', () => {
      post('/api/confirm').then(render);
    });

    const boot = async () => {
      const res = await fetch('/api/catalog');
      catalog = await res.json();
      const logRes = await fetch('/api/log');
      render(await logRes.json());
    };

    boot();
  </script>
</body>
</html>
"#;
