//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "记录管理器",
        table: "数据表",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            edit: "e",
            delete: "d",
            refresh: "r",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            switch_field: "切换输入框",
            submit: "提交",
            cancel_edit: "取消",
            select: "选择",
            edit: "编辑",
            delete: "删除",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        create_title: "新建记录",
        edit_title: "编辑记录",
        email: "邮箱",
        username: "用户名",
        email_placeholder: "user@example.com",
        username_placeholder: "用户名",
        create_button: "新建",
        update_button: "更新",
        cancel_button: "取消",
    },

    // ========================================================================
    // 表格
    // ========================================================================
    table: TableTexts {
        title: "记录",
        email: "邮箱",
        username: "用户名",
        created_at: "创建时间",
        actions: "操作",
        actions_hint: "e 编辑 · d 删除",
        loading: "正在加载记录...",
        loading_marker: "（加载中）",
        empty: "暂无记录，请在上方新建第一条记录！",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            message: "确定要删除这条记录吗？",
            cancel: "取消",
            confirm: "删除",
            key_hint: "Tab/←→ 切换 · Enter 执行 · y 确定 · n/Esc 取消",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        loading: "正在刷新...",
        creating: "正在新建记录...",
        updating: "正在更新记录...",
        deleting: "正在删除记录...",
        created: "记录已新建",
        updated: "记录已更新",
        deleted: "记录已删除",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        form_shortcuts: "表单",
        table_shortcuts: "记录表格",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "在表单与表格间切换",
            refresh: "重新加载记录",
            help: "显示帮助",
            quit: "退出",
            switch_field: "切换输入框",
            type_text: "输入 / 删除字符",
            submit: "新建或更新",
            cancel_edit: "取消编辑",
            move_up_down: "移动选中项",
            edit: "编辑选中记录",
            delete: "删除选中记录",
        },
    },
};
