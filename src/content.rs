//! Static copy shown by the scenes.

/// One command typed into a simulated terminal, with what it prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TranscriptEntry {
    /// Text typed after the prompt.
    pub command: &'static str,
    /// Output revealed once typing finishes.
    pub output: Option<&'static str>,
}

const fn entry(command: &'static str, output: &'static str) -> TranscriptEntry {
    TranscriptEntry {
        command,
        output: Some(output),
    }
}

/// One card of the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Feature {
    /// Emoji glyph.
    pub icon: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
}

/// Heading, subheading and terminal transcript of a walkthrough step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StepCopy {
    /// Heading.
    pub title: &'static str,
    /// Subheading.
    pub subtitle: &'static str,
    /// Commands, revealed one after another.
    pub transcript: &'static [TranscriptEntry],
}

/// Brand wordmark.
pub const LOGO_TEXT: &str = "OpenClaw";

/// Intro heading.
pub const INTRO_TITLE: &str = "AI 驱动的智能 Agent 平台";
/// Intro tagline.
pub const INTRO_SUBTITLE: &str = "下一代 AI 助手，让开发效率倍增";
/// Capability chips under the intro tagline.
pub const INTRO_CHIPS: [&str; 4] = [
    "💬 多渠道聊天",
    "🤖 智能代理",
    "🌐 浏览器自动化",
    "🔌 安全网关",
];

/// Features heading.
pub const FEATURES_TITLE: &str = "强大的核心功能";
/// Features subheading.
pub const FEATURES_SUBTITLE: &str = "构建 AI 驱动工作流所需的一切";
/// The four feature cards, in reading order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "💬",
        title: "多渠道支持",
        description: "连接 WhatsApp、Telegram、Discord、Slack 等，你的 AI Agent 随处可在",
    },
    Feature {
        icon: "🤖",
        title: "自定义 Agent",
        description: "创建具有独特个性、技能和工具访问权限的专用 AI Agent",
    },
    Feature {
        icon: "🌐",
        title: "浏览器自动化",
        description: "内置浏览器工具，实现网页抓取、自动化操作和完全控制",
    },
    Feature {
        icon: "🔌",
        title: "安全网关",
        description: "自托管网关，完全掌控数据、认证和 Agent 操作",
    },
];

/// Steps in the walkthrough indicator.
pub const TOTAL_STEPS: u32 = 5;

const ONBOARD_OUTPUT: &str = concat!(
    "═══════════════════════════════════════════\n",
    "    OpenClaw Onboarding Wizard v2.4.1\n",
    "═══════════════════════════════════════════\n\n",
    "欢迎使用 OpenClaw！让我们快速配置您的环境 🚀\n\n",
    "─────────────────────────────────────────────────\n\n",
    "【步骤 1/4】身份认证配置\n",
    "─────────────────────────────────────────────────\n\n",
    "OpenClaw 支持多个 AI 提供商，请选择:\n\n",
    "  1. Anthropic (Claude Sonnet/Opus)          ⭐ 推荐\n",
    "  2. OpenAI (GPT-4o/GPT-4o-mini)\n",
    "  3. Google (Gemini 2.0 Flash/Pro)\n",
    "  4. 其他兼容提供商\n\n",
    "您的选择 [1-4]: 1\n\n",
    "正在连接 Anthropic API...\n",
    "✓ API 密钥格式验证通过\n",
    "✓ 可用模型: Claude Sonnet 4.5, Claude Opus 4.5\n",
    "✓ Anthropic 认证配置成功\n\n",
    "─────────────────────────────────────────────────\n\n",
    "【步骤 2/4】网关基础设置\n",
    "─────────────────────────────────────────────────\n\n",
    "配置 OpenClaw Gateway 参数:\n\n",
    "Gateway 端口 [18789]: \n",
    "绑定地址 [0.0.0.0]: \n",
    "绑定模式 [loopback/any]: \n",
    "工作目录 [~/.openclaw]: \n",
    "\n✓ 使用默认配置 (推荐)\n",
    "✓ 网关参数已保存到 ~/.openclaw/config.json\n\n",
    "─────────────────────────────────────────────────\n\n",
    "【步骤 3/4】渠道连接设置\n",
    "─────────────────────────────────────────────────\n\n",
    "OpenClaw 支持以下渠道 (可多选):\n\n",
    "  [1] WhatsApp      ✅ 最受欢迎\n",
    "  [2] Telegram      ⚡ 快速设置\n",
    "  [3] Discord       👥 社区支持\n",
    "  [4] Slack         💼 工作协作\n",
    "  [5] iMessage      💬 Apple 生态\n",
    "  [6] Google Chat    📅 Gmail 集成\n\n",
    "请选择要启用的渠道 [1-6, 用空格分隔]: 2\n\n",
    "正在配置 Telegram Bot API...\n",
    "  Bot Token: ************\n",
    "✓ Telegram 连接测试成功\n",
    "✓ Bot @OpenClawAssistant 已就绪\n",
    "\n💡 提示: 稍后可通过 'openclaw channels add' 添加更多渠道\n\n",
    "─────────────────────────────────────────────────\n\n",
    "【步骤 4/4】系统服务安装\n",
    "─────────────────────────────────────────────────\n\n",
    "是否安装系统服务？\n",
    "服务将在系统启动时自动运行 [Y/n]: y\n\n",
    "检测操作系统: macOS (Darwin 24.6.0)\n",
    "正在创建 launchd 配置...\n",
    "✓ 配置文件: ~/Library/LaunchAgents/ai.openclaw.gateway.plist\n",
    "正在加载服务...\n",
    "✓ OpenClaw Gateway 服务已启动\n",
    "✓ 守护进程正在运行 (PID: 12345)\n",
    "\n正在检查健康状态...\n",
    "✓ Gateway 响应正常\n",
    "✓ WebSocket 服务就绪: ws://127.0.0.1:18789\n",
    "\n═══════════════════════════════════════════\n",
    "🎉 恭喜！OpenClaw 配置完成！\n",
    "═══════════════════════════════════════════\n\n",
    "─────────────────────────────────────────────────\n",
    "快速开始:\n",
    "─────────────────────────────────────────────────\n\n",
    "1. 打开控制面板:\n",
    "   openclaw dashboard\n",
    "   或访问: http://127.0.0.1:18789/\n\n",
    "2. 检查系统状态:\n",
    "   openclaw gateway status\n\n",
    "3. 查看日志:\n",
    "   openclaw logs --follow\n\n",
    "4. 发送测试消息:\n",
    "   openclaw message send --target <号码> --message \"你好\"\n\n",
    "─────────────────────────────────────────────────\n\n",
    "📚 完整文档: https://docs.openclaw.ai\n",
    "💻 GitHub: https://github.com/openclaw\n",
    "💬 社区支持: https://discord.gg/openclaw\n",
);

/// Step 1: environment check.
pub const INSTALL_CHECK: StepCopy = StepCopy {
    title: "检查系统环境",
    subtitle: "确保 Node.js 环境已准备就绪",
    transcript: &[
        entry(
            "node --version",
            "v22.11.0 ✓\nOpenClaw 需要 Node.js 22 或更新版本",
        ),
        entry("npm --version", "11.0.0 ✓\npm 包管理器已就绪"),
        entry("echo $SHELL", "/bin/zsh\nshell 环境检查通过"),
    ],
};

/// Step 2: install script.
pub const INSTALL_SCRIPT: StepCopy = StepCopy {
    title: "安装 OpenClaw",
    subtitle: "使用官方脚本快速安装",
    transcript: &[
        entry(
            "curl -fsSL https://openclaw.ai/install.sh | bash",
            concat!(
                "正在下载安装程序...\n\n[######################]   50.0%\n",
                "[###########################]  75.0%\n",
                "[######################################] 100.0%\n\n",
                "✓ OpenClaw CLI 安装成功\n",
                "✓ 位置: /usr/local/bin/openclaw\n",
                "✓ 版本: 2.4.1\n",
                "✓ 添加到 PATH 环境变量",
            ),
        ),
        entry("openclaw --version", "OpenClaw CLI v2.4.1\n安装验证通过！"),
        entry("which openclaw", "/usr/local/bin/openclaw\n✓ 命令行工具已就绪"),
    ],
};

/// Step 3: onboarding wizard.
pub const INSTALL_WIZARD: StepCopy = StepCopy {
    title: "运行配置向导",
    subtitle: "配置认证、网关和渠道",
    transcript: &[entry("openclaw onboard --install-daemon", ONBOARD_OUTPUT)],
};

/// Step 4: gateway and dashboard.
pub const GATEWAY: StepCopy = StepCopy {
    title: "开始使用 OpenClaw",
    subtitle: "检查网关状态并打开控制面板",
    transcript: &[
        entry(
            "openclaw gateway status",
            "状态: 运行中 ✓\n端口: 18789\n绑定: loopback\n运行时间: 2小时34分\n活跃会话: 3",
        ),
        entry(
            "openclaw dashboard",
            "正在打开控制面板...\n✓ 控制面板: http://127.0.0.1:18789/\n✓ 浏览器已打开\n\n现在可以与你的 AI Agent 聊天了！",
        ),
    ],
};

/// Step 5: test message.
pub const MESSAGE: StepCopy = StepCopy {
    title: "发送测试消息",
    subtitle: "通过命令行向任意渠道发送消息",
    transcript: &[entry(
        "openclaw message send --target +15555550123 --message \"你好，我是 OpenClaw\"",
        "正在发送消息...\n\n✓ 消息已发送\n✓ 目标: +15555550123 (WhatsApp)\n✓ 状态: 已送达\n\n试试与你的 AI Agent 聊天吧！",
    )],
};

/// Outro glyph.
pub const OUTRO_ICON: &str = "🚀";
/// Outro heading.
pub const OUTRO_TITLE: &str = "准备就绪！";
/// Outro tagline.
pub const OUTRO_SUBTITLE: &str = "开始使用 OpenClaw 构建 AI 驱动工作流";
/// Link chips on the closing card.
pub const OUTRO_LINKS: [&str; 3] = [
    "📚 文档: docs.openclaw.ai",
    "💻 GitHub: github.com/openclaw",
    "💬 社区 Discord",
];
